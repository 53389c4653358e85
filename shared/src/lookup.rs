//! Lookup/prediction state machine.
//!
//! A submit is split in two halves so a UI can release its borrow while the
//! request is in flight: [`LookupController::begin_submit`] validates and
//! hands out a [`PredictionTicket`], [`LookupController::complete`] applies the
//! response for that ticket. Each ticket carries the generation it was issued
//! under; submitting again or switching mode advances the generation, and a
//! response for an older generation is dropped.

use crate::error::{GatewayError, ValidationError};
use crate::gateway::Gateway;
use crate::model::{EntityMode, PackagePrediction, Prediction, PredictionReply, ReceptaclePrediction};

/// Identifies one outbound prediction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionTicket {
    pub mode: EntityMode,
    pub identifier: String,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupController {
    mode: EntityMode,
    input_id: String,
    result: Option<Prediction>,
    error_message: Option<String>,
    is_loading: bool,
    generation: u64,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EntityMode {
        self.mode
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn package_result(&self) -> Option<&PackagePrediction> {
        match &self.result {
            Some(Prediction::Package(p)) => Some(p),
            _ => None,
        }
    }

    pub fn receptacle_result(&self) -> Option<&ReceptaclePrediction> {
        match &self.result {
            Some(Prediction::Receptacle(r)) => Some(r),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input_id = value.into();
    }

    /// Switches mode and clears input, result and error, even when the mode
    /// does not change. Any request still in flight is abandoned.
    pub fn set_mode(&mut self, mode: EntityMode) {
        self.mode = mode;
        self.input_id.clear();
        self.result = None;
        self.error_message = None;
        self.is_loading = false;
        self.generation += 1;
    }

    /// Validates the input and marks a request as started.
    ///
    /// An empty or whitespace-only identifier sets the mode-specific prompt
    /// and returns an error; nothing should be sent in that case.
    pub fn begin_submit(&mut self) -> Result<PredictionTicket, ValidationError> {
        let identifier = self.input_id.trim();
        if identifier.is_empty() {
            let err = ValidationError::EmptyIdentifier(self.mode);
            self.error_message = Some(err.to_string());
            return Err(err);
        }

        let identifier = identifier.to_string();
        self.error_message = None;
        self.result = None;
        self.is_loading = true;
        self.generation += 1;

        log::info!("Requesting {} prediction for {}", self.mode, identifier);
        Ok(PredictionTicket { mode: self.mode, identifier, generation: self.generation })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` without touching state when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: &PredictionTicket,
        outcome: Result<PredictionReply<Prediction>, GatewayError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!("Dropping stale {} prediction for {}", ticket.mode, ticket.identifier);
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(PredictionReply::Accepted(prediction)) if prediction.mode() == ticket.mode => {
                self.result = Some(prediction);
            }
            Ok(PredictionReply::Accepted(prediction)) => {
                log::warn!(
                    "Expected a {} prediction but received a {} one",
                    ticket.mode,
                    prediction.mode()
                );
                self.error_message = Some(failure_message(ticket.mode));
            }
            Ok(PredictionReply::Rejected { error }) => {
                log::warn!("Prediction rejected for {}: {}", ticket.identifier, error);
                self.error_message = Some(error);
            }
            Err(err) => {
                log::error!("Prediction request for {} failed: {}", ticket.identifier, err);
                self.error_message = Some(failure_message(ticket.mode));
            }
        }
        true
    }

    /// Runs a whole submit against `gateway`. Returns whether a request was sent.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) -> bool {
        let Ok(ticket) = self.begin_submit() else {
            return false;
        };
        let outcome = gateway.predict(ticket.mode, &ticket.identifier).await;
        self.complete(&ticket, outcome);
        true
    }

    /// Export locator for the package currently shown, if any.
    pub fn export_url<G: Gateway>(&self, gateway: &G) -> Option<String> {
        self.package_result().map(|p| gateway.export_url(&p.mailitm_fid))
    }
}

fn failure_message(mode: EntityMode) -> String {
    format!("Failed to get prediction. Check the {} ID and try again.", mode.label())
}

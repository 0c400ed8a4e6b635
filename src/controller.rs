use crate::client::PredictionClient;
use crate::errors::AppError;
use crate::models::{CustomerProfile, Field, PredictionResult};

/// Owns one form instance: its record, busy flag, and last published result.
///
/// The state machine is just {idle, busy}. `submit` flips to busy for the
/// duration of the request and always lands back on idle, success or failure;
/// there is no persistent failed state.
pub struct FormController {
    profile: CustomerProfile,
    client: PredictionClient,
    busy: bool,
    result: Option<PredictionResult>,
}

impl FormController {
    /// Creates a controller holding the form's default record.
    pub fn new(client: PredictionClient) -> Self {
        Self {
            profile: CustomerProfile::default(),
            client,
            busy: false,
            result: None,
        }
    }

    /// Coerces and stores one field edit.
    pub fn update_field(&mut self, field: Field, raw: &str) {
        self.profile.set(field, raw);
    }

    /// The current record, read-only.
    pub fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    /// True while a prediction request is outstanding. The calling surface
    /// disables the submit action while this holds.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last successfully published prediction, if any. Failed submissions
    /// leave this untouched.
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Validates and submits the current record.
    ///
    /// A validation failure is returned to the caller before any request is
    /// issued. Network and server failures are logged and swallowed: the busy
    /// flag clears, nothing is published, and any prior result stays. A
    /// submit while busy is ignored, so at most one request is ever in
    /// flight per form.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        if self.busy {
            tracing::warn!("Submit ignored: a prediction request is already in flight");
            return Ok(());
        }

        self.profile.validate()?;

        self.busy = true;
        let outcome = self.client.predict(&self.profile).await;
        self.busy = false;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
            }
            Err(err) => {
                tracing::error!("Prediction failed: {}", err);
            }
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AppError;

// ============ Form Field Model ============

/// The ten customer attributes collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Geography,
    CreditScore,
    Gender,
    Age,
    Tenure,
    Balance,
    NumOfProducts,
    HasCrCard,
    IsActiveMember,
    EstimatedSalary,
}

/// Declared type of a form field, driving the typed parse and the
/// submission-time validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number (JSON integer).
    Integer,
    /// Monetary amount; integer or fractional (JSON number).
    Decimal,
    /// 0/1 flag, serialized as a JSON integer.
    Binary,
    /// One of a fixed set of text options (JSON string).
    Choice(&'static [&'static str]),
}

pub const GEOGRAPHY_OPTIONS: &[&str] = &["France", "Germany", "Spain"];
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 10] = [
        Field::Geography,
        Field::CreditScore,
        Field::Gender,
        Field::Age,
        Field::Tenure,
        Field::Balance,
        Field::NumOfProducts,
        Field::HasCrCard,
        Field::IsActiveMember,
        Field::EstimatedSalary,
    ];

    /// The JSON key for this field, exactly as the prediction service
    /// expects it.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Geography => "Geography",
            Field::CreditScore => "CreditScore",
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Tenure => "Tenure",
            Field::Balance => "Balance",
            Field::NumOfProducts => "NumOfProducts",
            Field::HasCrCard => "HasCrCard",
            Field::IsActiveMember => "IsActiveMember",
            Field::EstimatedSalary => "EstimatedSalary",
        }
    }

    /// Human-readable label, as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Geography => "Geography",
            Field::CreditScore => "Credit Score",
            Field::Gender => "Gender",
            Field::Age => "Age",
            Field::Tenure => "Tenure (Years)",
            Field::Balance => "Balance ($)",
            Field::NumOfProducts => "Number of Products",
            Field::HasCrCard => "Has Credit Card? (1/0)",
            Field::IsActiveMember => "Is Active Member? (1/0)",
            Field::EstimatedSalary => "Estimated Salary",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Geography => FieldKind::Choice(GEOGRAPHY_OPTIONS),
            Field::Gender => FieldKind::Choice(GENDER_OPTIONS),
            Field::CreditScore | Field::Age | Field::Tenure | Field::NumOfProducts => {
                FieldKind::Integer
            }
            Field::Balance | Field::EstimatedSalary => FieldKind::Decimal,
            Field::HasCrCard | Field::IsActiveMember => FieldKind::Binary,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============ Field Values ============

/// A single form value as currently held by the controller.
///
/// Raw input is coerced on entry: integers and finite floats become numbers,
/// everything else stays text. The empty string stays text too, so an
/// unfilled field never silently turns into zero; validation catches it at
/// submission time instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Typed coercion of raw form input.
    pub fn coerce(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Text(raw.to_string());
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return FieldValue::Int(n);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => FieldValue::Float(n),
            _ => FieldValue::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(t) => f.write_str(t),
        }
    }
}

// ============ Customer Profile ============

/// The form record posted to the prediction service.
///
/// JSON keys match the service contract verbatim. The record is created with
/// the form's defaults, mutated field-by-field as the user edits, and read
/// (never consumed) on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(rename = "Geography")]
    pub geography: FieldValue,
    #[serde(rename = "CreditScore")]
    pub credit_score: FieldValue,
    #[serde(rename = "Gender")]
    pub gender: FieldValue,
    #[serde(rename = "Age")]
    pub age: FieldValue,
    #[serde(rename = "Tenure")]
    pub tenure: FieldValue,
    #[serde(rename = "Balance")]
    pub balance: FieldValue,
    #[serde(rename = "NumOfProducts")]
    pub num_of_products: FieldValue,
    #[serde(rename = "HasCrCard")]
    pub has_cr_card: FieldValue,
    #[serde(rename = "IsActiveMember")]
    pub is_active_member: FieldValue,
    #[serde(rename = "EstimatedSalary")]
    pub estimated_salary: FieldValue,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            geography: FieldValue::Text("France".to_string()),
            credit_score: FieldValue::Int(600),
            gender: FieldValue::Text("Male".to_string()),
            age: FieldValue::Int(40),
            tenure: FieldValue::Int(3),
            balance: FieldValue::Int(60000),
            num_of_products: FieldValue::Int(2),
            has_cr_card: FieldValue::Int(1),
            is_active_member: FieldValue::Int(1),
            estimated_salary: FieldValue::Int(50000),
        }
    }
}

impl CustomerProfile {
    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Geography => &self.geography,
            Field::CreditScore => &self.credit_score,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
            Field::Tenure => &self.tenure,
            Field::Balance => &self.balance,
            Field::NumOfProducts => &self.num_of_products,
            Field::HasCrCard => &self.has_cr_card,
            Field::IsActiveMember => &self.is_active_member,
            Field::EstimatedSalary => &self.estimated_salary,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Geography => &mut self.geography,
            Field::CreditScore => &mut self.credit_score,
            Field::Gender => &mut self.gender,
            Field::Age => &mut self.age,
            Field::Tenure => &mut self.tenure,
            Field::Balance => &mut self.balance,
            Field::NumOfProducts => &mut self.num_of_products,
            Field::HasCrCard => &mut self.has_cr_card,
            Field::IsActiveMember => &mut self.is_active_member,
            Field::EstimatedSalary => &mut self.estimated_salary,
        }
    }

    /// Coerces raw input and stores it in the named field.
    pub fn set(&mut self, field: Field, raw: &str) {
        *self.slot_mut(field) = FieldValue::coerce(raw);
    }

    /// Checks every field against its declared kind.
    ///
    /// Runs before any network traffic; the first violation is returned as a
    /// `ValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        for field in Field::ALL {
            let value = self.get(field);
            match (field.kind(), value) {
                (FieldKind::Integer, FieldValue::Int(_)) => {}
                (FieldKind::Integer, _) => {
                    return Err(AppError::ValidationError(format!(
                        "{} must be a whole number, got '{}'",
                        field, value
                    )));
                }
                (FieldKind::Decimal, v) if v.is_numeric() => {}
                (FieldKind::Decimal, _) => {
                    return Err(AppError::ValidationError(format!(
                        "{} must be numeric, got '{}'",
                        field, value
                    )));
                }
                (FieldKind::Binary, FieldValue::Int(0) | FieldValue::Int(1)) => {}
                (FieldKind::Binary, _) => {
                    return Err(AppError::ValidationError(format!(
                        "{} must be 0 or 1, got '{}'",
                        field, value
                    )));
                }
                (FieldKind::Choice(options), FieldValue::Text(t))
                    if options.contains(&t.as_str()) => {}
                (FieldKind::Choice(options), _) => {
                    return Err(AppError::ValidationError(format!(
                        "{} must be one of {:?}, got '{}'",
                        field, options, value
                    )));
                }
            }
        }
        Ok(())
    }
}

// ============ Prediction Response Models ============

/// Verdict returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnPrediction {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

/// Outcome of one successful prediction request.
///
/// Trusted as delivered: probability is not range-checked on top of what the
/// service sends. A fresh value replaces any prior result wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub churn_prediction: ChurnPrediction,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictionResult {
    pub fn is_churn(&self) -> bool {
        self.churn_prediction == ChurnPrediction::Yes
    }
}

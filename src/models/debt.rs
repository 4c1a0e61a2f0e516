//! Debt model
//!
//! A tracked liability: credit card, loan, line of credit. Debts carry the
//! numbers the plan and overview screens need: balance, APR, the required
//! monthly minimum and the day of the month the payment is due.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::DebtId;
use super::money::Money;

/// The type label offered by default when adding a debt
pub const DEFAULT_DEBT_TYPE: &str = "Credit Card";

/// A tracked debt
///
/// Two debts are equal when they share an identifier, whatever their other
/// fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier, fixed for the debt's lifetime
    pub id: DebtId,

    /// Display name ("Visa Card", "Student Loan")
    pub name: String,

    /// Free-text type label ("Credit Card", "Loan")
    #[serde(rename = "type")]
    pub debt_type: String,

    /// Current amount owed
    pub balance: Money,

    /// Annual percentage rate, e.g. 19.99
    pub interest_rate: f64,

    /// Required monthly minimum payment
    pub minimum_payment: Money,

    /// Day of month the payment is due, intended 1-31
    pub due_day: i32,
}

/// Field values for creating or rewriting a debt
#[derive(Debug, Clone, PartialEq)]
pub struct DebtInput {
    pub name: String,
    pub debt_type: String,
    pub balance: Money,
    pub interest_rate: f64,
    pub minimum_payment: Money,
    pub due_day: i32,
}

impl DebtInput {
    /// Create debt input with the default type label
    pub fn new(
        name: impl Into<String>,
        balance: Money,
        interest_rate: f64,
        minimum_payment: Money,
        due_day: i32,
    ) -> Self {
        Self {
            name: name.into(),
            debt_type: DEFAULT_DEBT_TYPE.to_string(),
            balance,
            interest_rate,
            minimum_payment,
            due_day,
        }
    }

    /// Set the type label
    pub fn with_type(mut self, debt_type: impl Into<String>) -> Self {
        self.debt_type = debt_type.into();
        self
    }

    /// Check the fields the way the entry form does
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance(self.balance));
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(DebtValidationError::InvalidInterestRate(self.interest_rate));
        }
        if self.minimum_payment.is_negative() {
            return Err(DebtValidationError::NegativeMinimumPayment(
                self.minimum_payment,
            ));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(DebtValidationError::DueDayOutOfRange(self.due_day));
        }
        Ok(())
    }
}

impl Debt {
    /// Create a debt with a freshly generated identifier
    pub fn new(input: DebtInput) -> Self {
        let mut debt = Self {
            id: DebtId::new(),
            name: String::new(),
            debt_type: String::new(),
            balance: Money::zero(),
            interest_rate: 0.0,
            minimum_payment: Money::zero(),
            due_day: 1,
        };
        debt.apply(input);
        debt
    }

    /// Overwrite every field except the identifier
    pub fn apply(&mut self, input: DebtInput) {
        self.name = input.name;
        self.debt_type = input.debt_type;
        self.balance = input.balance;
        self.interest_rate = input.interest_rate;
        self.minimum_payment = input.minimum_payment;
        self.due_day = input.due_day;
    }

    /// The current fields as input, for partial edits
    pub fn to_input(&self) -> DebtInput {
        DebtInput {
            name: self.name.clone(),
            debt_type: self.debt_type.clone(),
            balance: self.balance,
            interest_rate: self.interest_rate,
            minimum_payment: self.minimum_payment,
            due_day: self.due_day,
        }
    }
}

impl PartialEq for Debt {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Debt {}

impl Hash for Debt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.debt_type, self.balance)
    }
}

/// Validation errors for debt input
#[derive(Debug, Clone, PartialEq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance(Money),
    InvalidInterestRate(f64),
    NegativeMinimumPayment(Money),
    DueDayOutOfRange(i32),
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance(balance) => {
                write!(f, "Balance cannot be negative: {}", balance)
            }
            Self::InvalidInterestRate(rate) => {
                write!(f, "Interest rate must be a non-negative number: {}", rate)
            }
            Self::NegativeMinimumPayment(payment) => {
                write!(f, "Minimum payment cannot be negative: {}", payment)
            }
            Self::DueDayOutOfRange(day) => {
                write!(f, "Due day must be between 1 and 31: {}", day)
            }
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn visa() -> DebtInput {
        DebtInput::new(
            "Visa Card",
            Money::from_dollars(2500),
            19.99,
            Money::from_dollars(75),
            15,
        )
    }

    #[test]
    fn test_new_debt() {
        let debt = Debt::new(visa());
        assert_eq!(debt.name, "Visa Card");
        assert_eq!(debt.debt_type, DEFAULT_DEBT_TYPE);
        assert_eq!(debt.balance, Money::from_dollars(2500));
        assert_eq!(debt.minimum_payment, Money::from_dollars(75));
        assert_eq!(debt.due_day, 15);
    }

    #[test]
    fn test_fresh_ids() {
        let a = Debt::new(visa());
        let b = Debt::new(visa());
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_by_id() {
        let a = Debt::new(visa());
        let mut b = a.clone();
        b.apply(visa().with_type("Loan"));
        b.balance = Money::zero();
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut debt = Debt::new(visa());
        let id = debt.id;
        debt.apply(
            DebtInput::new(
                "Student Loan",
                Money::from_dollars(12000),
                4.5,
                Money::from_dollars(150),
                1,
            )
            .with_type("Loan"),
        );
        assert_eq!(debt.id, id);
        assert_eq!(debt.name, "Student Loan");
        assert_eq!(debt.debt_type, "Loan");
        assert_eq!(debt.to_input().due_day, 1);
    }

    #[test]
    fn test_validation() {
        assert!(visa().validate().is_ok());

        let mut input = visa();
        input.name = "  ".into();
        assert_eq!(input.validate(), Err(DebtValidationError::EmptyName));

        let mut input = visa();
        input.due_day = 0;
        assert_eq!(input.validate(), Err(DebtValidationError::DueDayOutOfRange(0)));
        input.due_day = 32;
        assert_eq!(input.validate(), Err(DebtValidationError::DueDayOutOfRange(32)));

        let mut input = visa();
        input.balance = Money::from_cents(-1);
        assert!(matches!(
            input.validate(),
            Err(DebtValidationError::NegativeBalance(_))
        ));

        let mut input = visa();
        input.interest_rate = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(DebtValidationError::InvalidInterestRate(_))
        ));
    }

    #[test]
    fn test_type_serialized_as_type() {
        let debt = Debt::new(visa());
        let json = serde_json::to_value(&debt).unwrap();
        assert_eq!(json["type"], "Credit Card");
        assert_eq!(json["balance"], 250000);
    }
}

//! Selection codes typed by the operator, decoded once at the input
//! boundary. Matching is exact: `" 1"` or `"01"` are unrecognized.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl QuestionId {
    pub const ALL: [QuestionId; 5] = [
        QuestionId::One,
        QuestionId::Two,
        QuestionId::Three,
        QuestionId::Four,
        QuestionId::Five,
    ];

    pub fn index(self) -> usize {
        match self {
            QuestionId::One => 0,
            QuestionId::Two => 1,
            QuestionId::Three => 2,
            QuestionId::Four => 3,
            QuestionId::Five => 4,
        }
    }

    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Question(QuestionId),
    Exit,
    Unrecognized(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Question(QuestionId::One),
            "2" => MenuChoice::Question(QuestionId::Two),
            "3" => MenuChoice::Question(QuestionId::Three),
            "4" => MenuChoice::Question(QuestionId::Four),
            "5" => MenuChoice::Question(QuestionId::Five),
            "0" => MenuChoice::Exit,
            other => MenuChoice::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChoice {
    First,
    Second,
    Third,
    Unrecognized(String),
}

impl ItemChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => ItemChoice::First,
            "2" => ItemChoice::Second,
            "3" => ItemChoice::Third,
            other => ItemChoice::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeChoice {
    Square,
    Rectangle,
    Circle,
    Unrecognized(String),
}

impl ShapeChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => ShapeChoice::Square,
            "2" => ShapeChoice::Rectangle,
            "3" => ShapeChoice::Circle,
            other => ShapeChoice::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOperation {
    Deposit,
    Withdraw,
    Unrecognized(String),
}

impl AccountOperation {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => AccountOperation::Deposit,
            "2" => AccountOperation::Withdraw,
            other => AccountOperation::Unrecognized(other.to_string()),
        }
    }
}

use chrono::DateTime;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Lt,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    fn matches(&self, row: &Value) -> bool {
        let Some(field) = row.get(&self.column) else {
            return false;
        };

        match self.operator {
            Operator::Eq => *field == self.value,
            Operator::Lt => less_than(field, &self.value),
        }
    }
}

/// A conjunction of column conditions, rendered as PostgREST horizontal
/// filters (`column=op.value`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(self, column: &str, value: impl Into<Value>) -> Self {
        self.with(column, Operator::Eq, value.into())
    }

    pub fn lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.with(column, Operator::Lt, value.into())
    }

    fn with(mut self, column: &str, operator: Operator, value: Value) -> Self {
        self.conditions.push(Condition {
            column: column.to_string(),
            operator,
            value,
        });
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        self.conditions
            .iter()
            .map(|condition| {
                (
                    condition.column.clone(),
                    format!(
                        "{}.{}",
                        condition.operator.as_str(),
                        render(&condition.value)
                    ),
                )
            })
            .collect()
    }

    /// Evaluates the filter against a row the way the store would. Rows
    /// missing a filtered column never match.
    pub fn matches(&self, row: &Value) -> bool {
        self.conditions.iter().all(|condition| condition.matches(row))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn less_than(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        },
        (Value::String(a), Value::String(b)) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => a < b,
                _ => a < b,
            }
        }
        _ => false,
    }
}

use super::types::response::{self, TodoStats};
use crate::{
    modules::todo::repository::{self, Todo},
    utils::supabase::Client,
};

pub fn compute(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.is_completed()).count();
    let high_priority = todos
        .iter()
        .filter(|todo| todo.is_high_priority() && !todo.is_completed())
        .count();
    let completion_rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    TodoStats {
        total,
        completed,
        pending: total - completed,
        high_priority,
        completion_rate,
    }
}

pub async fn service(client: &dyn Client) -> response::Response {
    repository::find_all(client)
        .await
        .map(|todos| response::Success::Stats(compute(&todos)))
        .map_err(|err| response::Error::FailedToFetchTodos(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn todo(is_completed: bool, priority: &str) -> Todo {
        Todo {
            id: Value::Null,
            title: Value::Null,
            is_completed: json!(is_completed),
            priority: json!(priority),
            updated_at: Value::Null,
        }
    }

    #[test]
    fn counts_completed_pending_and_open_high_priority() {
        let todos = [
            todo(true, "high"),
            todo(false, "high"),
            todo(false, "low"),
        ];

        assert_eq!(
            compute(&todos),
            TodoStats {
                total: 3,
                completed: 1,
                pending: 2,
                high_priority: 1,
                completion_rate: 33,
            }
        );
    }

    #[test]
    fn empty_table_yields_zero_rate() {
        assert_eq!(
            compute(&[]),
            TodoStats {
                total: 0,
                completed: 0,
                pending: 0,
                high_priority: 0,
                completion_rate: 0,
            }
        );
    }

    #[test]
    fn completion_rate_rounds_to_nearest() {
        let two_of_three = [
            todo(true, "low"),
            todo(true, "low"),
            todo(false, "low"),
        ];
        assert_eq!(compute(&two_of_three).completion_rate, 67);

        let one_of_eight: Vec<Todo> = std::iter::once(todo(true, "medium"))
            .chain(std::iter::repeat_with(|| todo(false, "medium")).take(7))
            .collect();
        // 12.5 rounds up
        assert_eq!(compute(&one_of_eight).completion_rate, 13);
    }
}

//! GraphQL documents sent to the task service.

/// Boards with the metadata task creation needs
pub const LIST_BOARDS: &str = r#"query {
  boards(limit: 500) {
    id
    name
    groups { id title }
    columns { id title type }
  }
}"#;

/// User accounts
pub const LIST_USERS: &str = r#"query {
  users {
    id
    name
    email
  }
}"#;

/// Create an item; `columnValues` is a JSON-encoded string
pub const CREATE_ITEM: &str = r#"mutation ($boardId: ID!, $groupId: String!, $itemName: String!, $columnValues: JSON!) {
  create_item(board_id: $boardId, group_id: $groupId, item_name: $itemName, column_values: $columnValues) {
    id
    name
  }
}"#;

/// Attach a text update to an item
pub const CREATE_UPDATE: &str = r#"mutation ($itemId: ID!, $body: String!) {
  create_update(item_id: $itemId, body: $body) {
    id
  }
}"#;

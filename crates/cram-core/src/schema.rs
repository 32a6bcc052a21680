//! Structural output schema handed to the generation provider.
//!
//! The schema is plain data: a tree of [`SchemaDescriptor`] nodes built once by
//! [`study_plan_schema`] and passed by reference on every provider call. It
//! describes exactly the document that [`crate::validate`] accepts, minus the
//! local-only `completed` flag.

use serde_json::{json, Map, Value};

/// One node of a structural output schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDescriptor {
    Object {
        description: Option<String>,
        /// Properties in declaration order
        properties: Vec<(String, SchemaDescriptor)>,
        required: Vec<String>,
    },
    Array {
        description: Option<String>,
        items: Box<SchemaDescriptor>,
    },
    String {
        description: Option<String>,
    },
    Integer {
        description: Option<String>,
    },
}

impl SchemaDescriptor {
    /// Object node requiring every listed property.
    pub fn object(properties: Vec<(&str, SchemaDescriptor)>) -> Self {
        let required = properties.iter().map(|(name, _)| name.to_string()).collect();
        SchemaDescriptor::Object {
            description: None,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required,
        }
    }

    pub fn array(items: SchemaDescriptor) -> Self {
        SchemaDescriptor::Array {
            description: None,
            items: Box::new(items),
        }
    }

    pub fn string() -> Self {
        SchemaDescriptor::String { description: None }
    }

    pub fn integer() -> Self {
        SchemaDescriptor::Integer { description: None }
    }

    /// Attaches a description for the model.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self {
            SchemaDescriptor::Object { description, .. }
            | SchemaDescriptor::Array { description, .. }
            | SchemaDescriptor::String { description }
            | SchemaDescriptor::Integer { description } => *description = text,
        }
        self
    }

    /// Renders the provider's OpenAPI-subset representation.
    ///
    /// Types are upper-case (`OBJECT`, `ARRAY`, `STRING`, `INTEGER`);
    /// `required` lists properties in declaration order.
    pub fn to_json(&self) -> Value {
        let mut node = Map::new();
        let description = match self {
            SchemaDescriptor::Object {
                description,
                properties,
                required,
            } => {
                node.insert("type".to_string(), json!("OBJECT"));
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_json()))
                    .collect();
                node.insert("properties".to_string(), Value::Object(props));
                node.insert("required".to_string(), json!(required));
                description
            }
            SchemaDescriptor::Array { description, items } => {
                node.insert("type".to_string(), json!("ARRAY"));
                node.insert("items".to_string(), items.to_json());
                description
            }
            SchemaDescriptor::String { description } => {
                node.insert("type".to_string(), json!("STRING"));
                description
            }
            SchemaDescriptor::Integer { description } => {
                node.insert("type".to_string(), json!("INTEGER"));
                description
            }
        };
        if let Some(text) = description {
            node.insert("description".to_string(), json!(text));
        }
        Value::Object(node)
    }
}

/// Builds the schema of a generated study plan.
pub fn study_plan_schema() -> SchemaDescriptor {
    let task = SchemaDescriptor::object(vec![
        (
            "title",
            SchemaDescriptor::string().describe("A short, actionable task title."),
        ),
        (
            "description",
            SchemaDescriptor::string().describe("A brief one-sentence description of the task."),
        ),
    ]);

    let day = SchemaDescriptor::object(vec![
        (
            "label",
            SchemaDescriptor::string()
                .describe("The day of the week and date (e.g., \"Monday, October 28\")."),
        ),
        (
            "tasks",
            SchemaDescriptor::array(task).describe("A list of tasks for the day."),
        ),
    ]);

    let week = SchemaDescriptor::object(vec![
        (
            "weekNumber",
            SchemaDescriptor::integer().describe("The week number, starting from 1."),
        ),
        (
            "theme",
            SchemaDescriptor::string().describe("The main focus or theme for this week."),
        ),
        (
            "dailyTasks",
            SchemaDescriptor::array(day).describe("An array of daily tasks for the week."),
        ),
    ]);

    SchemaDescriptor::object(vec![
        (
            "title",
            SchemaDescriptor::string()
                .describe("A creative and motivating title for the study plan."),
        ),
        (
            "weeks",
            SchemaDescriptor::array(week).describe("An array of weekly plans."),
        ),
    ])
}

// Interview Question Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "InterviewQuestion";

/// Interview handlers ask at most this many questions
pub const MAX_QUESTION_NUMBER: u32 = 20;

/// One recorded question of an interview handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InterviewQuestion {
    pub interview_handler_object_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub question_number: u32,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_active: bool,
    /// Longest answer recorded, in seconds
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub max_msg_length: u32,
    pub question_text: String,
    pub voice_file: String,
}

impl fmt::Display for InterviewQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} (active={})", self.question_number, self.question_text, self.is_active)
    }
}

pub struct InterviewQuestionClient {
    base: BaseResourceClient,
}

fn collection_path(handler_id: &str) -> String {
    format!("handlers/interviewhandlers/{}/interviewquestions", handler_id)
}

impl InterviewQuestionClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "interview_question"),
        }
    }

    pub async fn list(&self, handler_id: impl Into<String>) -> CupiResult<Page<InterviewQuestion>> {
        let handler_id = self.validate_identifier(handler_id, "handler_id")?;
        self.fetch_page(&collection_path(&handler_id), ELEMENT, &Clauses::none()).await
    }

    pub async fn get(&self, handler_id: impl Into<String>, question_number: u32) -> CupiResult<InterviewQuestion> {
        let handler_id = self.validate_identifier(handler_id, "handler_id")?;
        let question_number = self.validate_range(question_number, 1, MAX_QUESTION_NUMBER, "question_number")?;
        let path = format!("{}/{}", collection_path(&handler_id), question_number);
        let identifier = format!("{} question {}", handler_id, question_number);
        self.fetch_single(&path, ELEMENT, &identifier).await
    }
}

impl ResourceClient for InterviewQuestionClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for InterviewQuestionClient {}

impl ResourceOperations for InterviewQuestionClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}

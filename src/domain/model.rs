use serde_json::Value;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7125";
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/Book/available";
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// 回應主體的 JSON 形狀，只有 200 回應才會判斷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadShape {
    List(usize),
    NotAList,
    Unparseable(String),
}

impl PayloadShape {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Array(items)) => PayloadShape::List(items.len()),
            Ok(_) => PayloadShape::NotAList,
            Err(e) => PayloadShape::Unparseable(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub status: u16,
    pub body: String,
    pub preview_chars: usize,
    pub payload: Option<PayloadShape>,
}

impl ProbeReport {
    pub fn new(status: u16, body: String, preview_chars: usize) -> Self {
        let payload = (status == 200).then(|| PayloadShape::from_body(&body));
        Self {
            status,
            body,
            preview_chars,
            payload,
        }
    }

    /// 依字元（非位元組）截斷，避免切在 UTF-8 中間
    pub fn preview(&self) -> &str {
        match self.body.char_indices().nth(self.preview_chars) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }

    pub fn item_count(&self) -> Option<usize> {
        match self.payload {
            Some(PayloadShape::List(count)) => Some(count),
            _ => None,
        }
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Response: {}...", self.preview())?;

        match &self.payload {
            Some(PayloadShape::List(count)) => {
                write!(f, "\nNumber of books returned: {}", count)
            }
            Some(PayloadShape::NotAList) => write!(f, "\nNumber of books returned: Not a list"),
            Some(PayloadShape::Unparseable(message)) => write!(f, "\nError: {}", message),
            None => Ok(()),
        }
    }
}

use crate::domain::model::{QueryFields, Role};
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::io::{Read, Stdin};
use std::sync::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};

/// 欄位來自 CLI 參數；沒有給 issue 時改讀 `reader`（預設為 stdin）
#[derive(Debug)]
pub struct CliInput<R: Read + Send = Stdin> {
    issue: Option<String>,
    country: String,
    role: Role,
    reader: Mutex<R>,
}

impl CliInput<Stdin> {
    pub fn new(issue: Option<String>, country: String, role: Role) -> Self {
        Self::with_reader(issue, country, role, std::io::stdin())
    }
}

impl<R: Read + Send> CliInput<R> {
    pub fn with_reader(issue: Option<String>, country: String, role: Role, reader: R) -> Self {
        Self {
            issue,
            country,
            role,
            reader: Mutex::new(reader),
        }
    }

    fn read_issue(&self) -> Result<String> {
        match &self.issue {
            Some(issue) => Ok(issue.clone()),
            None => {
                tracing::debug!("No --issue given, reading issue description from reader");
                let mut reader = match self.reader.lock() {
                    Ok(reader) => reader,
                    Err(poisoned) => poisoned.into_inner(),
                };

                let mut buffer = String::new();
                // 非 UTF-8 內容會變成 InvalidData 的 IO 錯誤
                without_stalling_runtime(|| reader.read_to_string(&mut buffer))?;
                Ok(buffer)
            }
        }
    }
}

/// 在 multi-thread runtime 上讀取時先讓出 worker
fn without_stalling_runtime<T>(read: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(read)
        }
        _ => read(),
    }
}

impl<R: Read + Send> InputSource for CliInput<R> {
    fn read_fields(&self) -> Result<QueryFields> {
        Ok(QueryFields {
            issue: self.read_issue()?,
            country: self.country.clone(),
            role: self.role,
        })
    }
}

/// Fixed field values, for embedding the submitter in other programs.
#[derive(Debug, Clone)]
pub struct StaticInput(pub QueryFields);

impl StaticInput {
    pub fn new(issue: impl Into<String>, country: impl Into<String>, role: Role) -> Self {
        Self(QueryFields {
            issue: issue.into(),
            country: country.into(),
            role,
        })
    }
}

impl InputSource for StaticInput {
    fn read_fields(&self) -> Result<QueryFields> {
        Ok(self.0.clone())
    }
}

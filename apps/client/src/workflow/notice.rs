use tokio::time::{Duration, Instant};
use tracing::debug;

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

/// At most one user-facing message, process-wide. A new `report` supersedes
/// the current message and restarts its expiry; expired notices disappear on
/// the next read.
#[derive(Debug, Default)]
pub struct NoticeChannel {
    current: Option<Notice>,
}

impl NoticeChannel {
    pub fn report(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "notice raised");
        self.current = Some(Notice {
            message,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&mut self) -> Option<&str> {
        if let Some(notice) = &self.current {
            if Instant::now() >= notice.expires_at {
                self.current = None;
            }
        }
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

//! Guard around the paper form submission.
//!
//! A submission only reaches the network when every required field is
//! filled in and a file is stored, and never while an earlier one is
//! still waiting for its reply.

use std::cell::RefCell;

use crate::config::{REDIRECT_DELAY_MS, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
use crate::services::api::PaperApi;
use crate::types::{AppError, AppResult, Notice, ServerReply, UploadedFile};

/// Default exam type of a paper.
pub const DEFAULT_EXAM_TYPE: &str = "Regular";

/// Values typed into the paper form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperFields {
    pub title: String,
    pub subject: String,
    pub year: String,
    pub semester: String,
    pub college: String,
    pub course: String,
    pub exam_type: String,
}

impl Default for PaperFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            year: String::new(),
            semester: String::new(),
            college: String::new(),
            course: String::new(),
            exam_type: DEFAULT_EXAM_TYPE.to_string(),
        }
    }
}

impl PaperFields {
    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            year: self.year.trim().to_string(),
            semester: self.semester.trim().to_string(),
            college: self.college.trim().to_string(),
            course: self.course.trim().to_string(),
            exam_type: self.exam_type.trim().to_string(),
        }
    }

    fn has_required(&self) -> bool {
        [&self.title, &self.subject, &self.year, &self.semester]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// A validated submission, ready to be posted.
#[derive(Clone, Debug, PartialEq)]
pub struct PaperSubmission {
    pub fields: PaperFields,
    pub file: UploadedFile,
}

impl PaperSubmission {
    /// Multipart fields of the `/upload` request.
    ///
    /// The file descriptor travels as JSON in `cloudinary_data`.
    pub fn form_fields(&self) -> AppResult<Vec<(&'static str, String)>> {
        let file = serde_json::to_string(&self.file)
            .map_err(|e| AppError::Validation(format!("Failed to serialize file: {}", e)))?;

        Ok(vec![
            ("title", self.fields.title.clone()),
            ("subject", self.fields.subject.clone()),
            ("year", self.fields.year.clone()),
            ("semester", self.fields.semester.clone()),
            ("college", self.fields.college.clone()),
            ("course", self.fields.course.clone()),
            ("exam_type", self.fields.exam_type.clone()),
            ("cloudinary_data", file),
        ])
    }
}

/// Why a submission did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A submission is already in flight
    Busy,
    MissingFields,
    MissingFile,
}

impl Rejection {
    /// Notice for the user. Clicks while busy are swallowed silently.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Rejection::Busy => None,
            Rejection::MissingFields => Some(Notice::danger("Please fill in all required fields.")),
            Rejection::MissingFile => Some(Notice::danger("Please upload a file.")),
        }
    }
}

/// Navigation scheduled after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub after_ms: u32,
}

/// Result of a submission that reached the server (or tried to).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub redirect: Option<Redirect>,
    /// The submit button stays busy until the page navigates away
    pub keep_busy: bool,
}

impl SubmitOutcome {
    pub fn from_reply(reply: AppResult<ServerReply>) -> Self {
        match reply {
            Ok(reply) if reply.is_success() => Self {
                notice: Notice::success(reply.message.unwrap_or_else(|| "Paper uploaded.".to_string())),
                redirect: reply.redirect.filter(|r| !r.is_empty()).map(|to| Redirect {
                    to,
                    after_ms: REDIRECT_DELAY_MS,
                }),
                keep_busy: true,
            },
            Ok(reply) => Self {
                notice: Notice::danger(
                    reply
                        .message
                        .unwrap_or_else(|| "Upload failed. Please try again.".to_string()),
                ),
                redirect: None,
                keep_busy: false,
            },
            Err(e) => {
                log::error!("Upload error: {}", e);
                Self {
                    notice: Notice::danger("Network error. Please check your connection and try again."),
                    redirect: None,
                    keep_busy: false,
                }
            }
        }
    }
}

/// Look of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

/// Busy flag of the paper form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionGuard {
    busy: bool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate and, on success, mark the form busy.
    ///
    /// Rejections leave the busy flag untouched.
    pub fn begin(
        &mut self,
        fields: &PaperFields,
        file: Option<&UploadedFile>,
    ) -> Result<PaperSubmission, Rejection> {
        if self.busy {
            return Err(Rejection::Busy);
        }
        if !fields.has_required() {
            return Err(Rejection::MissingFields);
        }
        let file = file.ok_or(Rejection::MissingFile)?;

        self.busy = true;
        Ok(PaperSubmission {
            fields: fields.trimmed(),
            file: file.clone(),
        })
    }

    /// Record the end of the request.
    pub fn settle(&mut self, outcome: &SubmitOutcome) {
        self.busy = outcome.keep_busy;
    }

    /// Button look given whether a file is stored.
    pub fn button(&self, file_ready: bool) -> SubmitButton {
        SubmitButton {
            disabled: self.busy || !file_ready,
            busy: self.busy,
            label: if self.busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
        }
    }
}

/// Shared access to the guard from an event handler and its request task.
pub trait GuardCell {
    /// Run `f` on the guard. `None` if the guard is gone.
    fn with_guard<R>(&self, f: impl FnOnce(&mut SubmissionGuard) -> R) -> Option<R>;
}

impl GuardCell for RefCell<SubmissionGuard> {
    fn with_guard<R>(&self, f: impl FnOnce(&mut SubmissionGuard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitResult {
    Rejected(Rejection),
    Finished(SubmitOutcome),
}

/// Validate, post and settle one submit attempt.
pub async fn submit_paper<A, G>(
    api: &A,
    guard: &G,
    fields: &PaperFields,
    file: Option<&UploadedFile>,
) -> SubmitResult
where
    A: PaperApi,
    G: GuardCell + ?Sized,
{
    let submission = match guard
        .with_guard(|g| g.begin(fields, file))
        .unwrap_or(Err(Rejection::Busy))
    {
        Ok(submission) => submission,
        Err(rejection) => {
            log::warn!("Submission rejected: {:?}", rejection);
            return SubmitResult::Rejected(rejection);
        }
    };

    let reply = api.submit_paper(&submission).await;
    let outcome = SubmitOutcome::from_reply(reply);
    guard.with_guard(|g| g.settle(&outcome));
    SubmitResult::Finished(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::feedback::FeedbackFields;
    use crate::types::{BookmarkStatus, NoticeKind};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Answers every submission with a canned reply and counts calls.
    struct CannedApi {
        reply: AppResult<ServerReply>,
        calls: Cell<usize>,
        last: RefCell<Option<PaperSubmission>>,
    }

    impl CannedApi {
        fn new(reply: AppResult<ServerReply>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl PaperApi for CannedApi {
        async fn submit_paper(&self, submission: &PaperSubmission) -> AppResult<ServerReply> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(submission.clone());
            self.reply.clone()
        }

        async fn toggle_bookmark(&self, _paper_id: u64) -> AppResult<BookmarkStatus> {
            unreachable!()
        }

        async fn send_feedback(&self, _feedback: &FeedbackFields) -> AppResult<ServerReply> {
            unreachable!()
        }
    }

    /// Holds the reply until the test releases it.
    struct PendingApi {
        calls: Cell<usize>,
        reply: RefCell<Option<oneshot::Receiver<ServerReply>>>,
    }

    impl PaperApi for PendingApi {
        async fn submit_paper(&self, _submission: &PaperSubmission) -> AppResult<ServerReply> {
            self.calls.set(self.calls.get() + 1);
            let receiver = self.reply.borrow_mut().take();
            match receiver {
                Some(rx) => rx.await.map_err(|_| AppError::Network("dropped".into())),
                None => Err(AppError::Network("no reply queued".into())),
            }
        }

        async fn toggle_bookmark(&self, _paper_id: u64) -> AppResult<BookmarkStatus> {
            unreachable!()
        }

        async fn send_feedback(&self, _feedback: &FeedbackFields) -> AppResult<ServerReply> {
            unreachable!()
        }
    }

    fn algebra() -> PaperFields {
        PaperFields {
            title: "Algebra".into(),
            subject: "Math".into(),
            year: "2023".into(),
            semester: "1".into(),
            ..Default::default()
        }
    }

    fn midterm() -> UploadedFile {
        UploadedFile {
            original_filename: "midterm.pdf".into(),
            bytes: 2_500_000,
            format: "pdf".into(),
            ..Default::default()
        }
    }

    fn saved() -> ServerReply {
        ServerReply {
            status: "success".into(),
            message: Some("Saved".into()),
            redirect: Some("/papers/42".into()),
        }
    }

    #[test]
    fn test_success_redirects_after_delay() {
        let api = CannedApi::new(Ok(saved()));
        let guard = RefCell::new(SubmissionGuard::new());

        let result = block_on(submit_paper(&api, &guard, &algebra(), Some(&midterm())));

        let SubmitResult::Finished(outcome) = result else {
            panic!("submission was rejected");
        };
        assert_eq!(outcome.notice, Notice::success("Saved"));
        assert_eq!(
            outcome.redirect,
            Some(Redirect {
                to: "/papers/42".into(),
                after_ms: 2000
            })
        );
        assert_eq!(api.calls.get(), 1);
        assert!(guard.borrow().is_busy());
    }

    #[test]
    fn test_blank_title_never_reaches_network() {
        let api = CannedApi::new(Ok(saved()));
        let guard = RefCell::new(SubmissionGuard::new());
        let fields = PaperFields {
            title: String::new(),
            ..algebra()
        };

        let result = block_on(submit_paper(&api, &guard, &fields, Some(&midterm())));

        assert_eq!(result, SubmitResult::Rejected(Rejection::MissingFields));
        assert_eq!(
            Rejection::MissingFields.notice().map(|n| n.message),
            Some("Please fill in all required fields.".to_string())
        );
        assert_eq!(api.calls.get(), 0);
        assert!(!guard.borrow().is_busy());
    }

    #[test]
    fn test_each_required_field_blanked() {
        let blankers: [fn(&mut PaperFields); 4] = [
            |f| f.title = "   ".into(),
            |f| f.subject = String::new(),
            |f| f.year = String::new(),
            |f| f.semester = " ".into(),
        ];

        for blank in blankers {
            let api = CannedApi::new(Ok(saved()));
            let guard = RefCell::new(SubmissionGuard::new());
            let mut fields = algebra();
            blank(&mut fields);

            let result = block_on(submit_paper(&api, &guard, &fields, Some(&midterm())));
            assert_eq!(result, SubmitResult::Rejected(Rejection::MissingFields));
            assert_eq!(api.calls.get(), 0);
        }
    }

    #[test]
    fn test_missing_file_never_reaches_network() {
        let api = CannedApi::new(Ok(saved()));
        let guard = RefCell::new(SubmissionGuard::new());

        let result = block_on(submit_paper(&api, &guard, &algebra(), None));

        assert_eq!(result, SubmitResult::Rejected(Rejection::MissingFile));
        assert_eq!(
            Rejection::MissingFile.notice().map(|n| n.message),
            Some("Please upload a file.".to_string())
        );
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let api = CannedApi::new(Ok(saved()));
        let guard = RefCell::new(SubmissionGuard::new());
        let fields = PaperFields {
            title: "  Algebra ".into(),
            college: String::new(),
            course: String::new(),
            ..algebra()
        };

        block_on(submit_paper(&api, &guard, &fields, Some(&midterm())));

        let sent = api.last.borrow().clone().unwrap();
        assert_eq!(sent.fields.title, "Algebra");
        assert_eq!(sent.fields.exam_type, "Regular");
    }

    #[test]
    fn test_server_failure_restores_button() {
        let api = CannedApi::new(Ok(ServerReply {
            status: "error".into(),
            message: Some("Duplicate paper".into()),
            redirect: None,
        }));
        let guard = RefCell::new(SubmissionGuard::new());

        let SubmitResult::Finished(outcome) =
            block_on(submit_paper(&api, &guard, &algebra(), Some(&midterm())))
        else {
            panic!("submission was rejected");
        };

        assert_eq!(outcome.notice, Notice::danger("Duplicate paper"));
        assert_eq!(outcome.redirect, None);
        assert_eq!(guard.borrow().button(true).label, "Upload Paper");
        assert!(!guard.borrow().button(true).disabled);
    }

    #[test]
    fn test_failure_without_message_uses_generic_text() {
        let outcome = SubmitOutcome::from_reply(Ok(ServerReply {
            status: "error".into(),
            message: None,
            redirect: None,
        }));
        assert_eq!(outcome.notice.message, "Upload failed. Please try again.");
    }

    #[test]
    fn test_transport_failure_restores_button() {
        let api = CannedApi::new(Err(AppError::Network("offline".into())));
        let guard = RefCell::new(SubmissionGuard::new());

        let SubmitResult::Finished(outcome) =
            block_on(submit_paper(&api, &guard, &algebra(), Some(&midterm())))
        else {
            panic!("submission was rejected");
        };

        assert_eq!(outcome.notice.kind, NoticeKind::Danger);
        assert_eq!(
            outcome.notice.message,
            "Network error. Please check your connection and try again."
        );
        assert!(!guard.borrow().is_busy());
    }

    #[test]
    fn test_no_second_request_while_first_outstanding() {
        let (tx, rx) = oneshot::channel();
        let api = Rc::new(PendingApi {
            calls: Cell::new(0),
            reply: RefCell::new(Some(rx)),
        });
        let guard = Rc::new(RefCell::new(SubmissionGuard::new()));
        let result = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let (api, guard, result) = (api.clone(), guard.clone(), result.clone());
            pool.spawner()
                .spawn_local(async move {
                    let r = submit_paper(&*api, &*guard, &algebra(), Some(&midterm())).await;
                    *result.borrow_mut() = Some(r);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        assert_eq!(api.calls.get(), 1);
        assert!(guard.borrow().is_busy());
        assert!(guard.borrow().button(true).disabled);
        assert_eq!(guard.borrow().button(true).label, "Uploading...");

        let second = block_on(submit_paper(&*api, &*guard, &algebra(), Some(&midterm())));
        assert_eq!(second, SubmitResult::Rejected(Rejection::Busy));
        assert_eq!(Rejection::Busy.notice(), None);
        assert_eq!(api.calls.get(), 1);

        tx.send(ServerReply {
            status: "error".into(),
            message: Some("Try later".into()),
            redirect: None,
        })
        .unwrap();
        pool.run_until_stalled();

        assert!(matches!(*result.borrow(), Some(SubmitResult::Finished(_))));
        assert!(!guard.borrow().is_busy());
    }

    #[test]
    fn test_button_follows_gate() {
        let guard = SubmissionGuard::new();
        assert!(guard.button(false).disabled);
        assert!(!guard.button(true).disabled);
    }

    #[test]
    fn test_form_fields_carry_file_json() {
        let submission = PaperSubmission {
            fields: algebra(),
            file: midterm(),
        };
        let fields = submission.form_fields().unwrap();
        let (_, data) = fields.iter().find(|(k, _)| *k == "cloudinary_data").unwrap();
        let file: UploadedFile = serde_json::from_str(data).unwrap();
        assert_eq!(file, midterm());
        assert!(fields.iter().any(|(k, v)| *k == "semester" && v == "1"));
    }
}

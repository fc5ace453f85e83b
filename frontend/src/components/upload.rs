//! Paper upload form.
//!
//! The file goes straight from the browser to Cloudinary through the
//! hosted widget; the form then posts the paper details together with
//! the stored file's metadata.

use leptos::*;

use crate::components::Notifier;
use crate::services::dom::follow_redirect;
use crate::services::widget::open_or_report;
use crate::services::{CloudinaryWidget, HttpApi};
use crate::state::submission::{submit_paper, GuardCell, SubmitResult};
use crate::state::{PaperFields, SubmissionGuard, UploadFlow, UploadPanels};
use crate::types::{AppResult, Notice, UploadWidgetConfig};

impl GuardCell for RwSignal<SubmissionGuard> {
    fn with_guard<R>(&self, f: impl FnOnce(&mut SubmissionGuard) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Input handler writing one field of the form.
fn on_field(fields: RwSignal<PaperFields>, set: fn(&mut PaperFields, String)) -> impl Fn(ev::Event) + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        fields.update(|f| set(f, value));
    }
}

#[component]
pub fn UploadPaperForm(config: AppResult<UploadWidgetConfig>, notifier: Notifier) -> impl IntoView {
    let flow = create_rw_signal(UploadFlow::new());
    let guard = create_rw_signal(SubmissionGuard::new());
    let fields = create_rw_signal(PaperFields::default());

    let created = config.and_then(|config| {
        CloudinaryWidget::create(&config, move |event| {
            if let Some(notice) = flow.try_update(|f| f.handle(event)).flatten() {
                notifier.notify(notice);
            }
        })
    });
    if let Err(e) = &created {
        log::error!("❌ Upload unavailable: {}", e);
        notifier.notify(Notice::danger(e.user_message()));
    }
    // Keeps the creation error so later clicks report the same cause.
    let widget = store_value(created);

    let panels = create_memo(move |_| flow.with(UploadPanels::of));
    let button = move || {
        let ready = flow.with(|f| f.gate().is_ready());
        guard.with(|g| g.button(ready))
    };

    let on_open = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        let opened = widget.with_value(open_or_report);
        if let Err(e) = opened {
            notifier.notify(Notice::danger(e.user_message()));
        }
    };

    let on_remove = move |_| {
        log::info!("🗑️ Removing uploaded file");
        flow.update(UploadFlow::remove_file);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = fields.get_untracked();
        let file = flow.with_untracked(|f| f.file().cloned());

        spawn_local(async move {
            let api = HttpApi::default();
            match submit_paper(&api, &guard, &current, file.as_ref()).await {
                SubmitResult::Rejected(rejection) => {
                    if let Some(notice) = rejection.notice() {
                        notifier.notify(notice);
                    }
                }
                SubmitResult::Finished(outcome) => {
                    notifier.notify(outcome.notice);
                    if let Some(redirect) = outcome.redirect {
                        follow_redirect(redirect).await;
                    }
                }
            }
        });
    };

    view! {
        <form id="uploadForm" class="upload-form" on:submit=on_submit novalidate=true>
            <div class="row">
                <div class="col-md-8 mb-3">
                    <label for="title" class="form-label">"Paper Title *"</label>
                    <input
                        type="text"
                        id="title"
                        class="form-control"
                        placeholder="e.g. Linear Algebra End Semester"
                        prop:value=move || fields.with(|f| f.title.clone())
                        on:input=on_field(fields, |f, v| f.title = v)
                    />
                </div>
                <div class="col-md-4 mb-3">
                    <label for="subject" class="form-label">"Subject *"</label>
                    <input
                        type="text"
                        id="subject"
                        class="form-control"
                        prop:value=move || fields.with(|f| f.subject.clone())
                        on:input=on_field(fields, |f, v| f.subject = v)
                    />
                </div>
            </div>

            <div class="row">
                <div class="col-md-4 mb-3">
                    <label for="year" class="form-label">"Year *"</label>
                    <input
                        type="number"
                        id="year"
                        class="form-control"
                        min="1990"
                        max="2100"
                        prop:value=move || fields.with(|f| f.year.clone())
                        on:input=on_field(fields, |f, v| f.year = v)
                    />
                </div>
                <div class="col-md-4 mb-3">
                    <label for="semester" class="form-label">"Semester *"</label>
                    <select
                        id="semester"
                        class="form-select"
                        prop:value=move || fields.with(|f| f.semester.clone())
                        on:change=on_field(fields, |f, v| f.semester = v)
                    >
                        <option value="">"Select semester"</option>
                        {(1..=8)
                            .map(|n| view! { <option value=n.to_string()>{format!("Semester {}", n)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="col-md-4 mb-3">
                    <label for="exam_type" class="form-label">"Exam Type"</label>
                    <select
                        id="exam_type"
                        class="form-select"
                        prop:value=move || fields.with(|f| f.exam_type.clone())
                        on:change=on_field(fields, |f, v| f.exam_type = v)
                    >
                        <option value="Regular">"Regular"</option>
                        <option value="Supplementary">"Supplementary"</option>
                        <option value="Mid-term">"Mid-term"</option>
                    </select>
                </div>
            </div>

            <div class="row">
                <div class="col-md-6 mb-3">
                    <label for="college" class="form-label">"College"</label>
                    <input
                        type="text"
                        id="college"
                        class="form-control"
                        prop:value=move || fields.with(|f| f.college.clone())
                        on:input=on_field(fields, |f, v| f.college = v)
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label for="course" class="form-label">"Course"</label>
                    <input
                        type="text"
                        id="course"
                        class="form-control"
                        prop:value=move || fields.with(|f| f.course.clone())
                        on:input=on_field(fields, |f, v| f.course = v)
                    />
                </div>
            </div>

            <div id="upload-widget-container" class="upload-area" class:hidden=move || !panels.with(|p| p.widget)>
                <i class="fas fa-cloud-upload-alt fa-3x mb-3"></i>
                <p>"PDF, DOC, DOCX, JPG or PNG, up to 16 MB"</p>
                <button type="button" id="upload-widget-btn" class="btn btn-primary" on:click=on_open>
                    <i class="fas fa-folder-open"></i>
                    " Choose File"
                </button>
            </div>

            <div id="upload-progress" class="upload-progress" class:hidden=move || !panels.with(|p| p.progress)>
                <div class="spinner-border text-primary" role="status"></div>
                <span class="ms-2">"Uploading file..."</span>
            </div>

            <div id="upload-result" class="upload-result" class:hidden=move || panels.with(|p| p.result.is_none())>
                {move || {
                    panels
                        .get()
                        .result
                        .map(|summary| {
                            view! {
                                <div class="file-info">
                                    <i class="fas fa-file-alt me-2"></i>
                                    <span class="file-name">{summary.name}</span>
                                    <span class="file-size badge bg-secondary ms-2">{summary.size}</span>
                                    <span class="file-format badge bg-info ms-1">{summary.format}</span>
                                </div>
                            }
                        })
                }}
                <button type="button" class="btn btn-sm btn-outline-danger mt-2" on:click=on_remove>
                    <i class="fas fa-times"></i>
                    " Remove"
                </button>
            </div>

            <div class="mt-4">
                <button type="submit" id="submitBtn" class="btn btn-success" disabled=move || button().disabled>
                    <i class=move || if button().busy { "fas fa-spinner fa-spin" } else { "fas fa-upload" }></i>
                    " "
                    {move || button().label}
                </button>
            </div>
        </form>
    }
}

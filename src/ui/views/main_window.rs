//! Main application window
//!
//! Owns the mailbox state and is the single dispatch point for child view
//! intents: every backend call starts here, and every server-confirmed
//! response is applied to the state here before the children are re-synced.

use std::sync::Arc;

use gpui::{
    div, prelude::FluentBuilder, px, AppContext, ClickEvent, Context, Entity, FocusHandle,
    Focusable, FontWeight, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window,
};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::{ApiError, NewEmail, Result as ApiResult};
use crate::app::{
    Compose, ComposeEvent, DetailEvent, Dismiss, InboxState, ListEvent, SidebarEvent,
};
use crate::domain::{Email, EmailFilter, EmailId};
use crate::services::MailboxService;
use crate::ui::components::{Button, ButtonSize, Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;
use crate::ui::views::{ComposeModal, EmailDetail, EmailList, Sidebar};

/// Main window view containing the primary application layout
pub struct MainWindow {
    colors: ThemeColors,
    focus_handle: FocusHandle,
    state: InboxState,
    service: Arc<MailboxService>,
    runtime: Handle,
    sidebar: Entity<Sidebar>,
    email_list: Entity<EmailList>,
    email_detail: Entity<EmailDetail>,
    compose: Option<Entity<ComposeModal>>,
    status: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl MainWindow {
    pub fn new(
        service: Arc<MailboxService>,
        runtime: Handle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let sidebar = cx.new(Sidebar::new);
        let email_list = cx.new(EmailList::new);
        let email_detail = cx.new(EmailDetail::new);

        let subscriptions = vec![
            cx.subscribe(&sidebar, Self::handle_sidebar_event),
            cx.subscribe(&email_list, Self::handle_list_event),
            cx.subscribe(&email_detail, Self::handle_detail_event),
        ];

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let mut this = Self {
            colors: ThemeColors::light(),
            focus_handle,
            state: InboxState::new(),
            service,
            runtime,
            sidebar,
            email_list,
            email_detail,
            compose: None,
            status: None,
            _subscriptions: subscriptions,
        };

        this.load_emails(EmailFilter::All, cx);
        this
    }

    // ------------------------------------------------------------------
    // Intent dispatch
    // ------------------------------------------------------------------

    fn handle_sidebar_event(
        &mut self,
        _sidebar: Entity<Sidebar>,
        event: &SidebarEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            SidebarEvent::ToggleCollapse => {
                self.state.toggle_sidebar();
                let collapsed = self.state.sidebar_collapsed;
                self.sidebar.update(cx, |sidebar, cx| {
                    sidebar.set_collapsed(collapsed);
                    cx.notify();
                });
            }
        }
    }

    fn handle_list_event(
        &mut self,
        _list: Entity<EmailList>,
        event: &ListEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            ListEvent::Select(id) => self.select_email(*id, cx),
            ListEvent::FilterChanged(filter) => self.load_emails(*filter, cx),
            ListEvent::ToggleArchive(id) => self.toggle_archive(*id, cx),
        }
    }

    fn handle_detail_event(
        &mut self,
        _detail: Entity<EmailDetail>,
        event: &DetailEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            DetailEvent::ToggleRead(id) => self.toggle_read(*id, cx),
            DetailEvent::ToggleArchive(id) => self.toggle_archive(*id, cx),
        }
    }

    fn handle_compose_event(
        &mut self,
        _modal: Entity<ComposeModal>,
        event: &ComposeEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            ComposeEvent::Submit(draft) => self.send_draft(draft.clone(), cx),
            ComposeEvent::Dismiss => self.close_compose(cx),
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    fn load_emails(&mut self, filter: EmailFilter, cx: &mut Context<Self>) {
        let generation = self.state.begin_load(filter);
        self.email_list.update(cx, |list, cx| {
            list.set_active_filter(filter);
            list.set_loading(true);
            cx.notify();
        });

        let service = self.service.clone();
        let task = self.runtime.spawn(async move { service.load(filter).await });

        cx.spawn(async move |this, cx| {
            let result = task.await;
            this.update(cx, |this, cx| {
                this.email_list.update(cx, |list, cx| {
                    list.set_loading(false);
                    cx.notify();
                });
                match result {
                    Ok(Ok(emails)) => {
                        if this.state.apply_loaded(generation, emails) {
                            this.sync_views(cx);
                            cx.notify();
                        }
                    }
                    Ok(Err(e)) => this.report_error("Loading emails", &e, cx),
                    Err(e) => tracing::error!("background task failed: {e}"),
                }
            })
            .ok();
        })
        .detach();
    }

    /// Selects an email and, when it was unread, issues a single mark-read
    /// update.
    fn select_email(&mut self, id: EmailId, cx: &mut Context<Self>) {
        let needs_mark_read = self.state.select(id);
        self.sync_views(cx);
        cx.notify();

        if needs_mark_read {
            let service = self.service.clone();
            let task = self
                .runtime
                .spawn(async move { service.set_read(id, true).await });
            self.apply_email_update("Updating email", task, cx);
        }
    }

    fn toggle_read(&mut self, id: EmailId, cx: &mut Context<Self>) {
        let Some(email) = self.state.email(id) else {
            return;
        };
        let target = !email.is_read;

        let service = self.service.clone();
        let task = self
            .runtime
            .spawn(async move { service.set_read(id, target).await });
        self.apply_email_update("Updating email", task, cx);
    }

    fn toggle_archive(&mut self, id: EmailId, cx: &mut Context<Self>) {
        let Some(email) = self.state.email(id) else {
            return;
        };
        let target = !email.is_archived;

        let service = self.service.clone();
        let task = self
            .runtime
            .spawn(async move { service.set_archived(id, target).await });
        self.apply_email_update("Archiving email", task, cx);
    }

    fn send_draft(&mut self, draft: NewEmail, cx: &mut Context<Self>) {
        let service = self.service.clone();
        let task = self.runtime.spawn(async move { service.send(draft).await });

        cx.spawn(async move |this, cx| {
            let result = task.await;
            this.update(cx, |this, cx| match result {
                Ok(Ok(created)) => {
                    this.state.insert_created(created);
                    this.compose = None;
                    this.sync_views(cx);
                    cx.notify();
                }
                Ok(Err(e)) => {
                    if let Some(compose) = &this.compose {
                        compose.update(cx, |modal, cx| {
                            modal.set_sending(false);
                            cx.notify();
                        });
                    }
                    this.report_error("Sending email", &e, cx);
                }
                Err(e) => tracing::error!("background task failed: {e}"),
            })
            .ok();
        })
        .detach();
    }

    /// Awaits a flag update and patches the confirmed record into the state.
    fn apply_email_update(
        &mut self,
        op: &'static str,
        task: JoinHandle<ApiResult<Email>>,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |this, cx| {
            let result = task.await;
            this.update(cx, |this, cx| match result {
                Ok(Ok(email)) => {
                    this.state.patch_email(email);
                    this.sync_views(cx);
                    cx.notify();
                }
                Ok(Err(e)) => this.report_error(op, &e, cx),
                Err(e) => tracing::error!("background task failed: {e}"),
            })
            .ok();
        })
        .detach();
    }

    fn open_compose(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.compose.is_some() {
            return;
        }
        self.state.open_compose();

        let modal = cx.new(ComposeModal::new);
        cx.subscribe(&modal, Self::handle_compose_event).detach();
        window.focus(&modal.read(cx).focus_handle(cx));
        self.compose = Some(modal);
        cx.notify();
    }

    fn close_compose(&mut self, cx: &mut Context<Self>) {
        self.state.close_compose();
        self.compose = None;
        cx.notify();
    }

    /// Every backend failure lands here: logged, surfaced as one status line,
    /// and the mailbox is otherwise left exactly as it was.
    fn report_error(&mut self, op: &str, error: &ApiError, cx: &mut Context<Self>) {
        tracing::error!("{op} failed: {error}");
        self.status = Some(format!("{op} failed"));
        cx.notify();
    }

    fn sync_views(&mut self, cx: &mut Context<Self>) {
        let emails = self.state.emails.clone();
        let selected_id = self.state.selected_id;
        let filter = self.state.active_filter;
        let selected_email = self.state.selected_email().cloned();

        self.email_list.update(cx, |list, cx| {
            list.set_emails(emails.clone(), selected_id);
            list.set_active_filter(filter);
            cx.notify();
        });
        self.email_detail.update(cx, |detail, cx| {
            detail.set_content(selected_email, &emails, cx);
            cx.notify();
        });
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let compose_handler = cx.listener(|this, _: &ClickEvent, window, cx| {
            this.open_compose(window, cx);
        });

        div()
            .h(px(56.0))
            .px(px(16.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(self.colors.border)
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(self.colors.text_primary)
                    .child(SharedString::from("Emails")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .child(
                        div()
                            .w(px(220.0))
                            .h(px(32.0))
                            .px(px(10.0))
                            .flex()
                            .items_center()
                            .gap(px(8.0))
                            .bg(self.colors.surface)
                            .border_1()
                            .border_color(self.colors.border)
                            .rounded(px(6.0))
                            .child(
                                Icon::named("header-search-icon", IconName::Search)
                                    .size(IconSize::Small),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(self.colors.text_muted)
                                    .child(SharedString::from("Search Email")),
                            ),
                    )
                    .child(
                        Button::new("new-message", "+ New Message")
                            .size(ButtonSize::Medium)
                            .on_click(compose_handler),
                    ),
            )
    }

    fn render_status_bar(&self) -> impl IntoElement {
        let unread = self.state.emails.iter().filter(|e| !e.is_read).count();
        let status = self
            .status
            .clone()
            .unwrap_or_else(|| "Ready".to_string());

        div()
            .h(px(24.0))
            .px(px(12.0))
            .flex()
            .items_center()
            .justify_between()
            .bg(self.colors.surface)
            .border_t_1()
            .border_color(self.colors.border)
            .child(
                div()
                    .text_xs()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from(status)),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from(format!("{unread} unread"))),
            )
    }
}

impl Focusable for MainWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("main-window")
            .size_full()
            .flex()
            .bg(self.colors.background)
            .text_color(self.colors.text_primary)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &Compose, window, cx| {
                this.open_compose(window, cx);
            }))
            .on_action(cx.listener(|this, _: &Dismiss, _window, cx| {
                if this.compose.is_some() {
                    this.close_compose(cx);
                }
            }))
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .child(self.render_header(cx))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .overflow_hidden()
                            .child(self.email_list.clone())
                            .child(self.email_detail.clone()),
                    )
                    .child(self.render_status_bar()),
            )
            .when_some(self.compose.clone(), |this, modal| this.child(modal))
    }
}

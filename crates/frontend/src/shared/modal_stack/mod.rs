use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    frame: ModalOptions,
}

/// Surface options of a pushed modal.
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub title: Option<String>,
    pub modal_class: Option<String>,
    pub modal_style: Option<String>,
    /// Overlay click and Escape are ignored while this returns false
    /// (a save or an upload is in flight).
    pub can_close: Option<CloseGuard>,
}

impl ModalOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.modal_class = Some(class.into());
        self
    }

    pub fn with_guard(mut self, can_close: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_close = Some(Arc::new(can_close));
        self
    }

    fn allows_close(&self) -> bool {
        self.can_close.as_ref().map(|f| f()).unwrap_or(true)
    }
}

/// Handle given to a modal's builder so the content can close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals (editor, due-date viewer, finalize, pickers).
///
/// Escape closes only the topmost modal (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // removing a modal during its own DOM event dispatch drops live closures
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(ModalOptions::default(), builder)
    }

    pub fn push_with_frame<F>(&self, frame: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder: ModalBuilder = Arc::new(builder);
        self.stack.update(|s| s.push(ModalEntry { id, builder, frame }));
        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    /// Drops every modal; used on logout.
    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

/// Renders the modal stack at the application root. Mounted once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if keyboard_event.key() != "Escape" || !svc.is_open() {
                return;
            }
            let allowed = svc
                .stack
                .with_untracked(|s| s.last().map(|e| e.frame.allows_close()))
                .unwrap_or(true);
            if allowed {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // host lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(_, entry)| entry.id}
                children=move |(idx, entry): (usize, ModalEntry)| {
                    let z_index = 1000 + idx as i32;
                    let frame = entry.frame.clone();
                    let id = entry.id;
                    let guard = frame.clone();
                    let on_close = Callback::new(move |_| {
                        if guard.allows_close() {
                            svc.close_deferred(id);
                        }
                    });
                    let content = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=frame.modal_style.unwrap_or_default()
                            modal_class=frame.modal_class.unwrap_or_default()
                            title=frame.title.unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

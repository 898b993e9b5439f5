use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-600 border-green-700",
            ToastType::Error => "bg-red-600 border-red-700",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds before the toast dismisses itself
    pub duration: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: 4000,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer_eq(ToastQueue::default);

    let add_toast = {
        let queue = queue.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let duration = toast.duration;
            queue.dispatch(ToastAction::Push(toast));

            let queue = queue.clone();
            Timeout::new(duration, move || queue.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let remove_toast = {
        let queue = queue.clone();
        Callback::from(move |id: Uuid| queue.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2" role="status">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| remove_toast.emit(toast_id))
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="text-lg font-bold mr-3">{ props.toast.toast_type.icon() }</span>
            <p class="flex-1 text-sm font-medium">{ &props.toast.message }</p>
            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200 focus:outline-none">
                <span class="text-lg">{"×"}</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_queue_push_and_dismiss() {
        let first = Toast::success("User deleted successfully");
        let second = Toast::error("Error deleting user").with_duration(8000);
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(first.clone()))
            .reduce(ToastAction::Push(second.clone()));
        assert_eq!(queue.toasts, vec![first.clone(), second.clone()]);

        let queue = queue.reduce(ToastAction::Dismiss(first.id));
        assert_eq!(queue.toasts, vec![second]);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let toast = Toast::success("ok");
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(toast.clone()))
            .reduce(ToastAction::Dismiss(Uuid::new_v4()));
        assert_eq!(queue.toasts, vec![toast]);
    }
}

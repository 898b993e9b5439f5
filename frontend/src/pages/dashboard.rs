use log::{debug, error, info};
use shared::state::users::{delete_confirmation_prompt, DELETE_FAILED, DELETE_SUCCEEDED};
use shared::{
    delete_user, AdminApi, AnalyticsTicket, DashboardAction, DashboardState, DashboardTab,
    PaginationCursor, UsersTicket,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpAdminApi;
use crate::components::charts::{bar_chart_svg, line_chart_svg, pie_chart_svg, SvgChart};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::header::Header;
use crate::components::pagination::Pagination;
use crate::components::stat_card::StatCard;
use crate::components::toast::{Toast, ToastContext};
use crate::components::user_table::UserTable;
use crate::config::Config;
use crate::theme::{self, Palette};

/// Yew wrapper around the dashboard reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStore(pub DashboardState);

impl Default for DashboardStore {
    fn default() -> Self {
        Self(DashboardState::new(Config::load().page_size))
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().apply(action)))
    }
}

type Dispatcher = UseReducerDispatcher<DashboardStore>;

fn load_analytics(dispatcher: Dispatcher, api: Rc<HttpAdminApi>) {
    let ticket = AnalyticsTicket::new();
    dispatcher.dispatch(DashboardAction::AnalyticsRequested(ticket));

    spawn_local(async move {
        match api.fetch_analytics().await {
            Ok(snapshot) => {
                debug!(
                    "Analytics loaded: {} users, {} chats",
                    snapshot.total_users, snapshot.total_chats
                );
                dispatcher.dispatch(DashboardAction::AnalyticsLoaded { ticket, snapshot });
            }
            Err(e) => {
                error!("Failed to fetch analytics: {}", e);
                dispatcher.dispatch(DashboardAction::AnalyticsFailed {
                    ticket,
                    error: e.user_message(),
                });
            }
        }
    });
}

fn load_users(dispatcher: Dispatcher, api: Rc<HttpAdminApi>, cursor: PaginationCursor) {
    let ticket = UsersTicket::for_cursor(&cursor);
    dispatcher.dispatch(DashboardAction::UsersRequested(ticket));

    spawn_local(async move {
        match api.fetch_users(ticket.skip, ticket.limit).await {
            Ok(page) => {
                debug!("Loaded {} users of {}", page.users.len(), page.total);
                dispatcher.dispatch(DashboardAction::UsersLoaded { ticket, page });
            }
            Err(e) => {
                error!("Failed to fetch users: {}", e);
                dispatcher.dispatch(DashboardAction::UsersFailed {
                    ticket,
                    error: e.user_message(),
                });
            }
        }
    });
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_reducer_eq(DashboardStore::default);
    let api = use_memo((), |_| HttpAdminApi::new(&Config::load()));
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let palette = theme::current();
    let state = &store.0;

    // Analytics are fetched once per mount; Retry re-issues the request.
    {
        let dispatcher = store.dispatcher();
        let api = api.clone();
        use_effect_with((), move |_| {
            load_analytics(dispatcher, api);
            || ()
        });
    }

    // The users window is fetched whenever the tab is entered or the page moves.
    {
        let dispatcher = store.dispatcher();
        let api = api.clone();
        let cursor = state.cursor;
        use_effect_with((state.tab, state.cursor.skip), move |(tab, _)| {
            if *tab == DashboardTab::Users {
                load_users(dispatcher, api, cursor);
            }
            || ()
        });
    }

    let select_tab = |tab: DashboardTab| {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DashboardAction::SelectTab(tab)))
    };

    let on_retry = {
        let dispatcher = store.dispatcher();
        let api = api.clone();
        Callback::from(move |_: MouseEvent| load_analytics(dispatcher.clone(), api.clone()))
    };

    let on_refresh = {
        let dispatcher = store.dispatcher();
        let api = api.clone();
        let cursor = state.cursor;
        Callback::from(move |_: MouseEvent| load_users(dispatcher.clone(), api.clone(), cursor))
    };

    let on_search = {
        let dispatcher = store.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DashboardAction::SetSearch(input.value()));
        })
    };

    let on_previous = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::PreviousPage))
    };

    let on_next = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::NextPage))
    };

    let on_request_delete = {
        let dispatcher = store.dispatcher();
        Callback::from(move |user_id: String| dispatcher.dispatch(DashboardAction::RequestDelete(user_id)))
    };

    let on_cancel_delete = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::CancelDelete))
    };

    let on_confirm_delete = {
        let dispatcher = store.dispatcher();
        let api = api.clone();
        let pending = state.pending_delete.clone();
        let add_toast = toasts.add_toast.clone();
        Callback::from(move |_: ()| {
            let Some(user_id) = pending.clone() else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let add_toast = add_toast.clone();

            dispatcher.dispatch(DashboardAction::DeleteStarted(user_id.clone()));
            spawn_local(async move {
                match delete_user(api.as_ref(), &user_id).await {
                    Ok(()) => {
                        info!("Deleted user {}", user_id);
                        dispatcher.dispatch(DashboardAction::UserDeleted(user_id));
                        add_toast.emit(Toast::success(DELETE_SUCCEEDED));
                    }
                    Err(e) => {
                        error!("Failed to delete user {}: {}", user_id, e);
                        dispatcher.dispatch(DashboardAction::DeleteFailed {
                            user_id,
                            error: e.user_message(),
                        });
                        add_toast.emit(Toast::error(DELETE_FAILED));
                    }
                }
            });
        })
    };

    let tab_button = |tab: DashboardTab, label: &'static str| {
        html! {
            <button
                onclick={select_tab(tab)}
                class={classes!(
                    "pb-4", "px-2", "font-semibold", "transition-colors",
                    if state.tab == tab { palette.tab_active } else { palette.tab_idle }
                )}
            >
                { label }
            </button>
        }
    };

    let content = match state.tab {
        DashboardTab::Analytics => analytics_view(state, palette, on_retry),
        DashboardTab::Users => {
            let users: Vec<_> = state.visible_users().into_iter().cloned().collect();
            html! {
                <div class="space-y-6">
                    <div class="flex justify-between items-center">
                        <h2 class={classes!("text-2xl", "font-bold", palette.heading)}>{"Users Management"}</h2>
                        <button
                            onclick={on_refresh}
                            disabled={state.users_loading}
                            class={classes!("px-4", "py-2", palette.primary_button)}
                        >
                            {"Refresh"}
                        </button>
                    </div>

                    <input
                        type="text"
                        placeholder="Search users..."
                        value={state.search.clone()}
                        oninput={on_search}
                        class={classes!("w-full", "px-4", "py-2", palette.input)}
                    />

                    if let Some(message) = &state.users_error {
                        <div class={classes!("px-4", "py-3", palette.error_banner)}>
                            { format!("Failed to load users: {}", message) }
                        </div>
                    }

                    <div class={classes!("overflow-hidden", palette.panel)}>
                        if state.users_loading {
                            <p class={classes!("px-6", "py-2", "text-sm", palette.muted)}>{"Loading..."}</p>
                        }
                        <UserTable
                            users={users}
                            on_delete={on_request_delete}
                            deleting={state.deleting.clone()}
                            palette={palette}
                        />
                        <Pagination
                            cursor={state.cursor}
                            on_previous={on_previous}
                            on_next={on_next}
                            busy={state.users_loading}
                            palette={palette}
                        />
                    </div>
                </div>
            }
        }
    };

    let prompt = state
        .pending_delete
        .as_deref()
        .map(delete_confirmation_prompt)
        .unwrap_or_default();

    html! {
        <div class={palette.page}>
            <Header />
            <div class="max-w-7xl mx-auto px-6 py-8">
                <div class={classes!("flex", "gap-4", "mb-8", "border-b", "border-zinc-800")}>
                    { tab_button(DashboardTab::Analytics, "Analytics") }
                    { tab_button(DashboardTab::Users, "Users") }
                </div>
                { content }
            </div>
            <ConfirmModal
                is_open={state.pending_delete.is_some()}
                title="Delete user"
                message={prompt}
                confirm_text="Delete"
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
                palette={palette}
            />
        </div>
    }
}

fn analytics_view(state: &DashboardState, palette: &'static Palette, on_retry: Callback<MouseEvent>) -> Html {
    if state.analytics_loading && state.analytics.is_none() {
        return html! {
            <div class="flex justify-center items-center min-h-96">
                <div class={palette.muted}>{"Loading..."}</div>
            </div>
        };
    }

    let snapshot = state.analytics.clone().unwrap_or_default();

    html! {
        <div class="space-y-8">
            if let Some(message) = &state.analytics_error {
                <div class={classes!("flex", "justify-between", "items-center", "px-4", "py-3", palette.error_banner)}>
                    <span>{ format!("Failed to load analytics: {}", message) }</span>
                    <button
                        onclick={on_retry}
                        disabled={state.analytics_loading}
                        class={classes!("px-3", "py-1", "text-sm", palette.primary_button)}
                    >
                        {"Retry"}
                    </button>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard label="Total Users" value={snapshot.total_users} palette={palette} />
                <StatCard label="Total Chats" value={snapshot.total_chats} palette={palette} />
                <StatCard label="Avg Chats/User" value={state.average_chats_per_user()} palette={palette} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <SvgChart
                    title="Daily Activity"
                    svg={line_chart_svg(&snapshot.daily_activity, palette)}
                    palette={palette}
                />
                <SvgChart
                    title="Chats by Model"
                    svg={pie_chart_svg(&snapshot, palette)}
                    palette={palette}
                />
            </div>

            <SvgChart
                title="Top Active Users"
                svg={bar_chart_svg(&snapshot.top_users, palette)}
                palette={palette}
            />
        </div>
    }
}

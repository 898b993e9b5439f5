use shared::AdminUserDto;
use yew::prelude::*;

use crate::theme::Palette;

#[derive(Properties, Clone, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<AdminUserDto>,
    /// Emits the `user_id` whose delete button was pressed
    pub on_delete: Callback<String>,
    /// User whose delete is in flight, if any
    #[prop_or_default]
    pub deleting: Option<String>,
    pub palette: &'static Palette,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    let palette = props.palette;
    let header_cell = classes!("px-6", "py-3", "text-left", "text-xs", "font-semibold", "uppercase", "tracking-wider");

    let rows = props.users.iter().map(|user| {
        let in_flight = props.deleting.as_deref() == Some(user.user_id.as_str());
        let disabled = user.is_protected() || in_flight;
        let on_click = {
            let on_delete = props.on_delete.clone();
            let user_id = user.user_id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(user_id.clone()))
        };

        html! {
            <tr key={user.id.clone()} class={palette.table_row}>
                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">{ &user.user_id }</td>
                <td class="px-6 py-4 whitespace-nowrap text-sm">{ user.chat_count }</td>
                <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", palette.muted)}>
                    { user.last_activity_display() }
                </td>
                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                    <button
                        onclick={on_click}
                        disabled={disabled}
                        class={classes!(
                            "px-3", "py-1.5", "rounded-md",
                            if disabled {
                                classes!("opacity-40", "cursor-not-allowed")
                            } else {
                                classes!("text-red-500", "hover:bg-red-500/10")
                            }
                        )}
                    >
                        { if in_flight { "Deleting..." } else { "Delete" } }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full">
                <thead class={palette.table_head}>
                    <tr>
                        <th class={header_cell.clone()}>{"User ID"}</th>
                        <th class={header_cell.clone()}>{"Chat Count"}</th>
                        <th class={header_cell.clone()}>{"Last Activity"}</th>
                        <th class={header_cell}>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.users.is_empty() {
                        <tr>
                            <td colspan="4" class={classes!("px-6", "py-8", "text-center", "text-sm", palette.muted)}>
                                {"No users found"}
                            </td>
                        </tr>
                    } else {
                        { for rows }
                    }
                </tbody>
            </table>
        </div>
    }
}

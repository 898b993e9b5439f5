use yew::prelude::*;

use crate::theme::Palette;

#[derive(Properties, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: u64,
    pub palette: &'static Palette,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("p-6", props.palette.panel)}>
            <p class={classes!("text-sm", "font-medium", props.palette.muted)}>{ props.label.clone() }</p>
            <p class={classes!("text-3xl", "font-bold", "mt-1", props.palette.heading)}>{ props.value }</p>
        </div>
    }
}

//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "operativo",
            label: "Operativo",
            icon: "obligations",
            items: vec![
                ("a001_obligation", tab_label_for_key("a001_obligation"), "obligations"),
                ("a001_obligation_new", tab_label_for_key("a001_obligation_new"), "plus"),
            ],
        },
        MenuGroup {
            id: "clientes",
            label: "Clientes",
            icon: "users",
            items: vec![
                ("a003_assign_obligations", tab_label_for_key("a003_assign_obligations"), "list-check"),
                ("a003_assign_responsible", tab_label_for_key("a003_assign_responsible"), "user-check"),
                ("a004_due_date_assignment", tab_label_for_key("a004_due_date_assignment"), "calendar"),
            ],
        },
        MenuGroup {
            id: "notificaciones",
            label: "Notificaciones",
            icon: "bell",
            items: vec![("sys_upcoming", tab_label_for_key("sys_upcoming"), "bell")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec![
        "operativo".to_string(),
        "clientes".to_string(),
        "notificaciones".to_string(),
    ]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;
                let items_stored = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(id)
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

//! Sidebar: role-filtered menu with a collapsible "Stations" group.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::use_role;
use contracts::system::navigation::MenuEntry;
use contracts::system::roles::{Role, Station};
use leptos::prelude::*;

const STATIONS_GROUP: &str = "stations";

#[derive(Clone, Debug, PartialEq)]
enum SidebarItem {
    Link(MenuEntry),
    Group {
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        items: Vec<MenuEntry>,
    },
}

/// Folds several scanner entries into one group; a single station stays a plain link.
fn sidebar_items(role: Role) -> Vec<SidebarItem> {
    let entries = role.menu();
    let stations: Vec<MenuEntry> = entries
        .iter()
        .filter(|e| Station::from_tab_key(e.key).is_some())
        .copied()
        .collect();

    if stations.len() < 2 {
        return entries.into_iter().map(SidebarItem::Link).collect();
    }

    let mut items = Vec::new();
    let mut group_placed = false;
    for entry in entries {
        if Station::from_tab_key(entry.key).is_none() {
            items.push(SidebarItem::Link(entry));
        } else if !group_placed {
            group_placed = true;
            items.push(SidebarItem::Group {
                id: STATIONS_GROUP,
                label: "Stations",
                icon: "scan",
                items: stations.clone(),
            });
        }
    }
    items
}

#[component]
fn SidebarLink(entry: MenuEntry, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_app_context();
    let key = entry.key;
    let padding = if nested { "28px" } else { "12px" };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
            style:padding-left=padding
            on:click=move |_| ctx.open_tab(entry.key, entry.label)
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{entry.label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let role = use_role();
    let expanded_groups = RwSignal::new(vec![STATIONS_GROUP]);

    view! {
        <div class="app-sidebar__content">
            {move || {
                sidebar_items(role.get())
                    .into_iter()
                    .map(|item| match item {
                        SidebarItem::Link(entry) => view! { <SidebarLink entry=entry /> }.into_any(),
                        SidebarItem::Group { id, label, icon: group_icon, items } => {
                            let is_expanded = move || expanded_groups.with(|g| g.contains(&id));
                            view! {
                                <div>
                                    <div
                                        class="app-sidebar__item"
                                        style:padding-left="12px"
                                        on:click=move |_| {
                                            expanded_groups.update(|g| {
                                                if let Some(pos) = g.iter().position(|x| *x == id) {
                                                    g.remove(pos);
                                                } else {
                                                    g.push(id);
                                                }
                                            })
                                        }
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(group_icon)}
                                            <span>{label}</span>
                                        </div>
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=is_expanded
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    </div>
                                    <Show when=is_expanded>
                                        <div class="app-sidebar__children">
                                            {items
                                                .clone()
                                                .into_iter()
                                                .map(|entry| view! { <SidebarLink entry=entry nested=true /> })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::navigation::*;

    #[test]
    fn test_admin_gets_stations_group() {
        let items = sidebar_items(Role::Admin);
        let groups: Vec<_> = items
            .iter()
            .filter_map(|i| match i {
                SidebarItem::Group { items, .. } => Some(items.len()),
                _ => None,
            })
            .collect();
        assert_eq!(groups, vec![3]);
        assert!(matches!(items.last(), Some(SidebarItem::Link(e)) if e.key == TAB_PROFILE));
    }

    #[test]
    fn test_single_station_stays_flat() {
        let items = sidebar_items(Role::Printer);
        assert!(items
            .iter()
            .all(|i| matches!(i, SidebarItem::Link(_))));
        assert!(items
            .iter()
            .any(|i| matches!(i, SidebarItem::Link(e) if e.key == TAB_SCAN_PRINTER)));
    }
}

use contracts::domain::a007_stock_item::{
    StockItem, StockItemInput, StockVariant, StockVariantInput, DEFAULT_MIN_STOCK_LEVEL,
};
use contracts::shared::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::agents;
use crate::shared::components::{alert, confirm, EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::query_cache::{use_query_cache, Q_STOCK_ITEMS};

/// Empty input is `None`; anything else must be a whole number.
fn parse_stock_level(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| format!("\"{}\" is not a whole number", raw))
}

fn optional_text(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "—".into())
}

// ============================================================================
// Stock items
// ============================================================================

/// Stock items table with an add/edit form; a clicked row expands its variants.
#[component]
pub fn StockItemsList() -> impl IntoView {
    let cache = use_query_cache();

    let (items, set_items) = signal(Vec::<StockItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let name = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<EntityId>);
    let expanded = RwSignal::new(None::<EntityId>);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = cache.version(Q_STOCK_ITEMS);
        set_loading.set(true);
        spawn_local(async move {
            match agents::get_stock_items().await {
                Ok(v) => {
                    set_error.set(None);
                    set_items.set(v);
                }
                Err(e) => {
                    log::error!("Failed to load stock items: {}", e);
                    set_error.set(Some("Error loading stock items.".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let reset_form = move || {
        name.set(String::new());
        sku.set(String::new());
        editing.set(None);
    };

    let submit = move |_| {
        let input = StockItemInput {
            name: name.get_untracked().trim().to_string(),
            sku: sku.get_untracked().trim().to_string(),
        };
        if let Err(message) = input.validate() {
            alert(&message);
            return;
        }
        let target = editing.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(id) => agents::update_stock_item(id, &input).await,
                None => agents::create_stock_item(&input).await,
            };
            match result {
                Ok(_) => {
                    reset_form();
                    cache.invalidate(Q_STOCK_ITEMS);
                }
                Err(e) => alert(&format!("Error saving stock item: {}", e)),
            }
            saving.set(false);
        });
    };

    let start_edit = move |item: &StockItem| {
        let input = StockItemInput::from_item(item);
        name.set(input.name);
        sku.set(input.sku);
        editing.set(Some(item.id.clone()));
    };

    let delete_item = move |id: EntityId| {
        if !confirm("Are you sure you want to delete this stock item?") {
            return;
        }
        spawn_local(async move {
            match agents::delete_stock_item(&id).await {
                Ok(()) => {
                    if expanded.get_untracked().as_ref() == Some(&id) {
                        expanded.set(None);
                    }
                    cache.invalidate(Q_STOCK_ITEMS);
                }
                Err(e) => alert(&format!("Error deleting stock item: {}", e)),
            }
        });
    };

    let expanded_item = move || {
        let id = expanded.get()?;
        items.with(|list| list.iter().find(|i| i.id == id).cloned())
    };

    view! {
        <section class="details-section stock-items">
            <h3 class="details-section__title">"Stock Items"</h3>
            <div class="form-row">
                <label class="filter-field">
                    <span class="filter-field__label">"Name"</span>
                    <Input value=name placeholder="Name" />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"SKU"</span>
                    <Input value=sku placeholder="SKU" />
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=submit
                >
                    {move || if editing.with(Option::is_some) { "Update Stock Item" } else { "Add Stock Item" }}
                </Button>
                <Show when=move || editing.with(Option::is_some)>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_form()>
                        "Cancel"
                    </Button>
                </Show>
            </div>
            <ErrorBanner error=error />
            <Show
                when=move || !(loading.get() && items.with(|i| i.is_empty()))
                fallback=|| view! { <LoadingIndicator label="Loading stock items..." /> }
            >
                <Show
                    when=move || !items.with(|i| i.is_empty())
                    fallback=|| view! { <EmptyState message="No stock items found." /> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Variants"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|item| (item.id.clone(), item.name.clone(), item.sku.clone(), item.variants.len())
                                children=move |item| {
                                    let item = StoredValue::new(item);
                                    let id = item.with_value(|i| i.id.clone());
                                    let row_id = id.clone();
                                    let is_expanded = move || expanded.with(|e| e.as_ref() == Some(&row_id));
                                    let toggle_id = id.clone();
                                    let id_label = id.to_string();
                                    view! {
                                        <tr
                                            class="table__row--clickable"
                                            class:table__row--selected=is_expanded
                                            on:click=move |_| {
                                                let id = toggle_id.clone();
                                                expanded.update(|e| {
                                                    *e = if e.as_ref() == Some(&id) { None } else { Some(id) };
                                                });
                                            }
                                        >
                                            <TableCell>{id_label}</TableCell>
                                            <TableCell>{item.with_value(|i| i.name.clone())}</TableCell>
                                            <TableCell>{item.with_value(|i| i.sku.clone())}</TableCell>
                                            <TableCell>{item.with_value(|i| i.variants.len())}</TableCell>
                                            <td class="table__actions" on:click=|ev| ev.stop_propagation()>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| item.with_value(|i| start_edit(i))
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_item(id.clone())
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
            {move || expanded_item().map(|item| view! { <StockVariantsSection item=item /> })}
        </section>
    }
}

// ============================================================================
// Variants
// ============================================================================

#[derive(Clone, Copy)]
struct VariantForm {
    sku: RwSignal<String>,
    name: RwSignal<String>,
    color: RwSignal<String>,
    size: RwSignal<String>,
    current_stock: RwSignal<String>,
    min_stock_level: RwSignal<String>,
    max_stock_level: RwSignal<String>,
    editing: RwSignal<Option<EntityId>>,
}

impl VariantForm {
    fn new() -> Self {
        Self {
            sku: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            color: RwSignal::new(String::new()),
            size: RwSignal::new(String::new()),
            current_stock: RwSignal::new("0".into()),
            min_stock_level: RwSignal::new(DEFAULT_MIN_STOCK_LEVEL.to_string()),
            max_stock_level: RwSignal::new(String::new()),
            editing: RwSignal::new(None),
        }
    }

    fn fill(&self, input: StockVariantInput, id: Option<EntityId>) {
        self.sku.set(input.sku);
        self.name.set(input.name);
        self.color.set(input.color);
        self.size.set(input.size);
        self.current_stock.set(input.current_stock.to_string());
        self.min_stock_level.set(input.min_stock_level.to_string());
        self.max_stock_level
            .set(input.max_stock_level.map(|v| v.to_string()).unwrap_or_default());
        self.editing.set(id);
    }

    fn reset(&self) {
        self.fill(StockVariantInput::default(), None);
    }

    fn to_input(&self, stock_item_id: EntityId) -> Result<StockVariantInput, String> {
        let input = StockVariantInput {
            sku: self.sku.get_untracked().trim().to_string(),
            name: self.name.get_untracked().trim().to_string(),
            color: self.color.get_untracked().trim().to_string(),
            size: self.size.get_untracked().trim().to_string(),
            current_stock: parse_stock_level(&self.current_stock.get_untracked())?.unwrap_or(0),
            min_stock_level: parse_stock_level(&self.min_stock_level.get_untracked())?
                .unwrap_or(DEFAULT_MIN_STOCK_LEVEL),
            max_stock_level: parse_stock_level(&self.max_stock_level.get_untracked())?,
            ..StockVariantInput::for_item(stock_item_id)
        };
        input.validate()?;
        Ok(input)
    }
}

#[component]
fn StockVariantsSection(item: StockItem) -> impl IntoView {
    let cache = use_query_cache();
    let form = VariantForm::new();
    let saving = RwSignal::new(false);
    let item_id = StoredValue::new(item.id.clone());
    let variants = item.variants.clone();
    let has_variants = !variants.is_empty();

    let submit = move |_| {
        let input = match form.to_input(item_id.get_value()) {
            Ok(input) => input,
            Err(message) => {
                alert(&message);
                return;
            }
        };
        let target = form.editing.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let result = match &target {
                Some(id) => agents::update_stock_variant(id, &input).await,
                None => agents::create_stock_variant(&input).await,
            };
            match result {
                Ok(_) => {
                    form.reset();
                    cache.invalidate(Q_STOCK_ITEMS);
                }
                Err(e) => alert(&format!("Error saving variant: {}", e)),
            }
            saving.set(false);
        });
    };

    let start_edit = move |variant: &StockVariant| {
        form.fill(
            StockVariantInput::from_variant(item_id.get_value(), variant),
            Some(variant.id.clone()),
        );
    };

    let delete_variant = move |id: EntityId| {
        if !confirm("Are you sure you want to delete this variant?") {
            return;
        }
        spawn_local(async move {
            match agents::delete_stock_variant(&id).await {
                Ok(()) => cache.invalidate(Q_STOCK_ITEMS),
                Err(e) => alert(&format!("Error deleting variant: {}", e)),
            }
        });
    };

    view! {
        <div class="stock-variants">
            <h4 class="details-section__title">
                {format!("Variants for Stock Item: {}", item.name)}
            </h4>
            <div class="form-grid">
                <label class="filter-field">
                    <span class="filter-field__label">"Variant SKU"</span>
                    <Input value=form.sku />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Variant Name"</span>
                    <Input value=form.name />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Color"</span>
                    <Input value=form.color />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Size"</span>
                    <Input value=form.size />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Current Stock"</span>
                    <Input value=form.current_stock input_type=InputType::Number />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Min Stock Level"</span>
                    <Input value=form.min_stock_level input_type=InputType::Number />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Max Stock Level"</span>
                    <Input value=form.max_stock_level input_type=InputType::Number placeholder="Optional" />
                </label>
            </div>
            <div class="form-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=submit
                >
                    {move || if form.editing.with(Option::is_some) { "Update Variant" } else { "Add Variant" }}
                </Button>
                <Show when=move || form.editing.with(Option::is_some)>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| form.reset()>
                        "Cancel"
                    </Button>
                </Show>
            </div>
            {if has_variants {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Color"</TableHeaderCell>
                                <TableHeaderCell>"Size"</TableHeaderCell>
                                <TableHeaderCell>"Current Stock"</TableHeaderCell>
                                <TableHeaderCell>"Min Stock"</TableHeaderCell>
                                <TableHeaderCell>"Max Stock"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {variants
                                .into_iter()
                                .map(|variant| {
                                    let low = variant.is_low();
                                    let id = variant.id.clone();
                                    let variant = StoredValue::new(variant);
                                    view! {
                                        <TableRow>
                                            <TableCell>{variant.with_value(|v| v.sku.clone())}</TableCell>
                                            <TableCell>{variant.with_value(|v| v.name.clone())}</TableCell>
                                            <TableCell>{variant.with_value(|v| optional_text(&v.color))}</TableCell>
                                            <TableCell>{variant.with_value(|v| optional_text(&v.size))}</TableCell>
                                            <TableCell>
                                                <span class:stock-level--low=low>
                                                    {variant.with_value(|v| v.current_stock)}
                                                </span>
                                            </TableCell>
                                            <TableCell>{variant.with_value(|v| v.min_stock_level)}</TableCell>
                                            <TableCell>
                                                {variant.with_value(|v| {
                                                    v.max_stock_level.map(|m| m.to_string()).unwrap_or_else(|| "—".into())
                                                })}
                                            </TableCell>
                                            <td class="table__actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| variant.with_value(|v| start_edit(v))
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_variant(id.clone())
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            } else {
                view! { <EmptyState message="No variants found for this stock item." /> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock_level() {
        assert_eq!(parse_stock_level(""), Ok(None));
        assert_eq!(parse_stock_level(" 12 "), Ok(Some(12)));
        assert!(parse_stock_level("1.5").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(&None), "—");
        assert_eq!(optional_text(&Some(String::new())), "—");
        assert_eq!(optional_text(&Some("Red".into())), "Red");
    }
}

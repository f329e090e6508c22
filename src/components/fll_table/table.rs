use leptos::prelude::*;

use crate::components::lineage_summary::ROW_CLASS;
use crate::lineage::{Field, FieldId};

/// One dataset: a name row followed by a clickable row per field. Each field
/// row's DOM id is the field id, which is what links point at.
#[component]
pub fn FllTable(
	/// Dataset name.
	#[prop(into)]
	table_id: String,
	/// Rows, in display order.
	fields: Vec<Field>,
	/// Styles the table as the focal dataset.
	#[prop(optional)]
	is_target: bool,
	/// Receives the id of a clicked row.
	on_field_click: Callback<FieldId>,
) -> impl IntoView {
	let class = if is_target { "fll-table target" } else { "fll-table" };
	let count = fields.len();

	view! {
		<div class=class>
			<div class="fll-table-name">
				<strong>{table_id}</strong>
				<span class="fll-table-count">{format!(" ({count} fields)")}</span>
			</div>
			{fields
				.into_iter()
				.map(|field| {
					let id = field.id.clone();
					view! {
						<div id=field.id class=ROW_CLASS on:click=move |_| on_field_click.run(id.clone())>
							{field.name}
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

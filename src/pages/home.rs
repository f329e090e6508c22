use leptos::prelude::*;

use crate::components::lineage_summary::{LineageSummary, SummaryConfig};
use crate::lineage::{FieldSet, LineageSnapshot, Link, provide_lineage};

const TARGET: &str = "customer_summary";
const TARGET_FIELDS: &[&str] = &["customer_id", "full_name", "lifetime_spend", "last_order"];

/// Sample lineage around one target dataset: two upstream datasets feeding it
/// and two downstream datasets reading from it.
fn generate_sample_data() -> LineageSnapshot {
	let cause_sets = vec![
		FieldSet::new("customers", ["id", "first_name", "last_name"]),
		FieldSet::new("orders", ["customer_id", "amount", "placed_at"]),
	];
	let impact_sets = vec![
		FieldSet::new("marketing_segments", ["customer_id", "tier"]),
		FieldSet::new("churn_report", ["customer_id", "days_since_order"]),
	];
	let target_fields = FieldSet::new(TARGET, TARGET_FIELDS.iter().copied()).fields;

	let edges: &[(&str, &str)] = &[
		("customers_id", "customer_summary_customer_id"),
		("orders_customer_id", "customer_summary_customer_id"),
		("customers_first_name", "customer_summary_full_name"),
		("customers_last_name", "customer_summary_full_name"),
		("orders_amount", "customer_summary_lifetime_spend"),
		("orders_placed_at", "customer_summary_last_order"),
		("customer_summary_customer_id", "marketing_segments_customer_id"),
		("customer_summary_lifetime_spend", "marketing_segments_tier"),
		("customer_summary_customer_id", "churn_report_customer_id"),
		("customer_summary_last_order", "churn_report_days_since_order"),
	];

	LineageSnapshot {
		cause_sets,
		target: TARGET.into(),
		target_fields,
		impact_sets,
		links: edges.iter().map(|&(s, d)| Link::new(s, d)).collect(),
		..Default::default()
	}
}

/// Inline style of the bar above the summary. Links are drawn `offset_y`
/// above the measured rows, so the summary root must sit exactly that far
/// down the viewport.
fn app_bar_style(config: &SummaryConfig) -> String {
	format!(
		"height: {}px; box-sizing: border-box; display: flex; align-items: center; padding: 0 16px;",
		-config.offset_y
	)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let lineage = Signal::derive(generate_sample_data);
	provide_lineage(lineage);
	let config = SummaryConfig::default();
	let bar_style = app_bar_style(&config);

	view! {
		<header class="app-bar" style=bar_style>
			<h1>"Field Level Lineage: " {TARGET}</h1>
		</header>
		<div class="lineage-page">
			<LineageSummary config=config class="fll-summary" />
		</div>
	}
}

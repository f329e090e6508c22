use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;

use super::config::SummaryConfig;
use super::debounce::{Debouncer, ResizeSubscription};
use super::redraw::{RedrawReport, redraw, select_field};
use super::surface::{DomSurface, OVERLAY_ID};
use crate::components::fll_table::{ColumnKind, FllHeader, FllTable};
use crate::lineage::{FieldId, Link, use_lineage};

const OVERLAY_STYLE: &str = "position: absolute; height: 100%; width: 100%; pointer-events: none;";

/// Runs `f` over the held links and config; `None` once the summary's owner
/// has been disposed (a frame or timer queued before unmount).
fn with_held<R>(
	links: StoredValue<Vec<Link>>,
	config: StoredValue<SummaryConfig>,
	f: impl FnOnce(&[Link], &SummaryConfig) -> R,
) -> Option<R> {
	links
		.try_with_value(|links| config.try_with_value(|cfg| f(links, cfg)))
		.flatten()
}

/// Cause, target and impact columns with curved links drawn between related
/// field rows. Reads its data from [`provide_lineage`](crate::lineage::provide_lineage).
///
/// Links are redrawn after mount, after each snapshot change (unless disabled
/// in `config`), after window resizes and when a field row is clicked.
#[component]
pub fn LineageSummary(
	/// Layout offsets, anchor shape, colors and redraw triggers.
	#[prop(optional)]
	config: SummaryConfig,
	/// Extra class on the summary root.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	let lineage = use_lineage();
	let root_style = config.root_style();
	let track_data = config.redraw_on_data_change;
	let debounce_ms = config.resize_debounce_ms;
	let config = StoredValue::new(config);

	// Written on every render of the overlay, read by every redraw.
	let active_links = StoredValue::new(Vec::<Link>::new());
	let active_field = StoredValue::new(None::<FieldId>);
	let resize = StoredValue::new_local(None::<ResizeSubscription>);
	let overlay_ref = NodeRef::<leptos::svg::Svg>::new();

	let redraw_now = move || {
		let Some(field) = active_field.try_get_value() else {
			debug!("summary unmounted, skipping redraw");
			return;
		};
		let surface = match DomSurface::new() {
			Ok(surface) => surface,
			Err(err) => {
				warn!("cannot draw links: {err}");
				return;
			}
		};
		let report: Option<RedrawReport> = with_held(active_links, config, |links, cfg| {
			redraw(&surface, links, field.as_deref(), cfg)
		});
		if report.is_none() {
			debug!("summary unmounted, skipping redraw");
		}
	};

	Effect::new(move |_| {
		if track_data {
			lineage.track();
		}
		if overlay_ref.get().is_none() {
			return;
		}
		// Rows for the latest snapshot are measurable on the next frame.
		let frame = Closure::once_into_js(redraw_now);
		if let Some(window) = web_sys::window() {
			let _ = window.request_animation_frame(frame.unchecked_ref());
		}
	});

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let debouncer = Debouncer::on_window(window.clone(), debounce_ms, redraw_now);
		match ResizeSubscription::attach(window, debouncer) {
			Ok(subscription) => resize.set_value(Some(subscription)),
			Err(err) => warn!("resize redraw disabled: {err}"),
		}
	});

	on_cleanup(move || {
		resize.try_update_value(|subscription| drop(subscription.take()));
	});

	let on_field_click = Callback::new(move |field: FieldId| {
		let surface = match DomSurface::new() {
			Ok(surface) => surface,
			Err(err) => {
				warn!("cannot select {field}: {err}");
				return;
			}
		};
		if active_field.try_set_value(Some(field.clone())).is_some() {
			return;
		}
		with_held(active_links, config, |links, cfg| {
			select_field(&surface, &field, links, cfg)
		});
	});

	view! {
		<div id="fll-container" class=class style=root_style>
			<svg id=OVERLAY_ID node_ref=overlay_ref style=OVERLAY_STYLE>
				<g>
					{move || {
						let links = lineage.with(|s| s.links.clone());
						active_links.set_value(links.clone());
						links
							.into_iter()
							.map(|link| view! { <svg id=link.container_id() class="fll-link" /> })
							.collect_view()
					}}
				</g>
			</svg>

			<div class="fll-column">
				{move || lineage.with(|s| view! {
					<FllHeader kind=ColumnKind::Cause first=s.first_cause total=s.cause_sets.len() />
				})}
				{move || lineage.with(|s| {
					s.cause_sets
						.iter()
						.map(|set| view! {
							<FllTable
								table_id=set.table_id.clone()
								fields=set.fields.clone()
								on_field_click=on_field_click
							/>
						})
						.collect_view()
				})}
			</div>

			<div class="fll-column">
				{move || lineage.with(|s| view! {
					<FllHeader kind=ColumnKind::Target first=s.first_field total=s.target_fields.len() />
					<FllTable
						table_id=s.target.clone()
						fields=s.target_fields.clone()
						is_target=true
						on_field_click=on_field_click
					/>
				})}
			</div>

			<div class="fll-column">
				{move || lineage.with(|s| view! {
					<FllHeader kind=ColumnKind::Impact first=s.first_impact total=s.impact_sets.len() />
				})}
				{move || lineage.with(|s| {
					s.impact_sets
						.iter()
						.map(|set| view! {
							<FllTable
								table_id=set.table_id.clone()
								fields=set.fields.clone()
								on_field_click=on_field_click
							/>
						})
						.collect_view()
				})}
			</div>
		</div>
	}
}

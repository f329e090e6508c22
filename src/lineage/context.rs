use leptos::prelude::*;
use log::warn;

use super::types::LineageSnapshot;

#[derive(Clone, Copy)]
struct LineageContext(Signal<LineageSnapshot>);

/// Makes `snapshot` available to every lineage view below the current owner.
pub fn provide_lineage(snapshot: Signal<LineageSnapshot>) {
	Effect::new(move |_| {
		snapshot.with(|snap| {
			for link in snap.dangling_links() {
				warn!(
					"link {} -> {} references a field that is not rendered",
					link.source, link.destination
				);
			}
		});
	});
	provide_context(LineageContext(snapshot));
}

/// The snapshot supplied by the nearest [`provide_lineage`].
///
/// Panics when called outside a lineage provider.
pub fn use_lineage() -> Signal<LineageSnapshot> {
	expect_context::<LineageContext>().0
}

use leptos::prelude::*;

/// Which of the three summary columns a header belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
	/// Upstream datasets.
	Cause,
	/// The focal dataset's fields.
	Target,
	/// Downstream datasets.
	Impact,
}

impl ColumnKind {
	fn title(self) -> &'static str {
		match self {
			ColumnKind::Cause => "Cause datasets",
			ColumnKind::Target => "Target fields",
			ColumnKind::Impact => "Impact datasets",
		}
	}

	fn empty_text(self) -> &'static str {
		match self {
			ColumnKind::Target => "No fields",
			ColumnKind::Cause | ColumnKind::Impact => "No related datasets",
		}
	}
}

/// "Viewing 1 to 10 of 42" for a page starting at the 1-based `first`.
fn summary_text(kind: ColumnKind, first: usize, total: usize, page_size: usize) -> String {
	if total == 0 {
		return kind.empty_text().to_owned();
	}
	let first = first.clamp(1, total);
	let last = (first + page_size.max(1) - 1).min(total);
	format!("Viewing {first} to {last} of {total}")
}

/// Column title plus a count summary.
#[component]
pub fn FllHeader(
	/// Which column this heads.
	kind: ColumnKind,
	/// 1-based position of the first item shown.
	first: usize,
	/// Items in the column.
	total: usize,
	/// Items per page.
	#[prop(default = 10)]
	page_size: usize,
) -> impl IntoView {
	view! {
		<div class="fll-header" style="height: 50px; box-sizing: border-box;">
			<div class="fll-header-title">{kind.title()}</div>
			<div class="fll-header-summary">{summary_text(kind, first, total, page_size)}</div>
		</div>
	}
}

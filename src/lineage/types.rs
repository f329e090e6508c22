use std::collections::HashSet;

/// DOM id of a rendered field row, `<tableId>_<fieldName>`.
pub type FieldId = String;

/// A single column of a dataset taking part in lineage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
	/// Row id, unique across the summary.
	pub id: FieldId,
	/// Column name as displayed.
	pub name: String,
	/// Dataset the field belongs to.
	pub table_id: String,
}

impl Field {
	/// Field `name` of `table_id`, with its row id derived from both.
	pub fn new(table_id: impl Into<String>, name: impl Into<String>) -> Self {
		let (table_id, name) = (table_id.into(), name.into());
		Self {
			id: format!("{table_id}_{name}"),
			name,
			table_id,
		}
	}
}

/// The fields of one dataset, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
	/// Dataset name shown above the fields.
	pub table_id: String,
	/// Fields in display order.
	pub fields: Vec<Field>,
}

impl FieldSet {
	/// Builds a set whose field ids are derived from `table_id`.
	pub fn new<I, S>(table_id: impl Into<String>, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let table_id = table_id.into();
		let fields = names
			.into_iter()
			.map(|name| Field::new(table_id.clone(), name))
			.collect();
		Self { table_id, fields }
	}
}

/// Directed data flow from one field row to another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	/// Upstream row.
	pub source: FieldId,
	/// Downstream row.
	pub destination: FieldId,
}

impl Link {
	/// Link from `source` to `destination`.
	pub fn new(source: impl Into<FieldId>, destination: impl Into<FieldId>) -> Self {
		Self {
			source: source.into(),
			destination: destination.into(),
		}
	}

	/// Id of the overlay element the link is drawn into.
	pub fn container_id(&self) -> String {
		format!("{}_{}", self.source, self.destination)
	}

	/// `field` is either endpoint.
	pub fn touches(&self, field: &str) -> bool {
		self.source == field || self.destination == field
	}
}

/// Everything the summary view renders for one target dataset.
///
/// `first_*` are the 1-based positions of the first item shown in each column,
/// used by the column headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineageSnapshot {
	/// Upstream datasets, left column.
	pub cause_sets: Vec<FieldSet>,
	/// Name of the focal dataset.
	pub target: String,
	/// Fields of the focal dataset, middle column.
	pub target_fields: Vec<Field>,
	/// Downstream datasets, right column.
	pub impact_sets: Vec<FieldSet>,
	/// Position of the first cause dataset shown.
	pub first_cause: usize,
	/// Position of the first impact dataset shown.
	pub first_impact: usize,
	/// Position of the first target field shown.
	pub first_field: usize,
	/// Every link drawn between rendered rows.
	pub links: Vec<Link>,
}

impl Default for LineageSnapshot {
	fn default() -> Self {
		Self {
			cause_sets: Vec::new(),
			target: String::new(),
			target_fields: Vec::new(),
			impact_sets: Vec::new(),
			first_cause: 1,
			first_impact: 1,
			first_field: 1,
			links: Vec::new(),
		}
	}
}

impl LineageSnapshot {
	/// Ids of every row the summary renders, cause columns first.
	pub fn field_ids(&self) -> impl Iterator<Item = &str> {
		let causes = self.cause_sets.iter().flat_map(|set| set.fields.iter());
		let impacts = self.impact_sets.iter().flat_map(|set| set.fields.iter());
		causes
			.chain(self.target_fields.iter())
			.chain(impacts)
			.map(|field| field.id.as_str())
	}

	/// Links with an endpoint that no rendered row carries.
	pub fn dangling_links(&self) -> Vec<&Link> {
		let rendered: HashSet<&str> = self.field_ids().collect();
		self.links
			.iter()
			.filter(|link| {
				!rendered.contains(link.source.as_str())
					|| !rendered.contains(link.destination.as_str())
			})
			.collect()
	}
}

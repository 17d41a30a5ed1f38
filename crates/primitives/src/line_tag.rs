use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::position::LineNr;

/// Editability of a single document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineTag {
	/// The user may change this line.
	#[default]
	Editable,
	/// The line is owned by the system and must not change.
	Immutable,
}

/// Decoration kinds emitted by the host's diff/decoration classifier.
///
/// Only [`DecorationType::Immutable`] affects editing; the others are
/// highlighting hints that leave a line editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationType {
	/// System-owned line.
	Immutable,
	/// Line added relative to the previous version.
	Added,
	/// Line modified relative to the previous version.
	Modified,
	/// Comment or annotation line.
	Comment,
	/// Any decoration this crate does not know about.
	#[serde(other)]
	Other,
}

/// One classifier output record.
///
/// Rows are 0-based; lines are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationRow {
	/// The 0-based row.
	#[serde(rename = "$r")]
	pub row: usize,
	/// What the classifier decided about the row.
	#[serde(rename = "decorationType")]
	pub decoration_type: DecorationType,
}

impl DecorationRow {
	/// Creates a row record.
	pub const fn new(row: usize, decoration_type: DecorationType) -> Self {
		Self { row, decoration_type }
	}

	/// Returns the 1-based line this row decorates.
	pub const fn line(&self) -> LineNr {
		self.row + 1
	}

	/// Returns the tag this row implies.
	pub const fn tag(&self) -> LineTag {
		match self.decoration_type {
			DecorationType::Immutable => LineTag::Immutable,
			_ => LineTag::Editable,
		}
	}
}

/// Per-line tags for a document.
///
/// The map is sparse: lines without an entry are editable. It is always
/// replaced wholesale when the classifier reruns, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTags {
	tags: BTreeMap<LineNr, LineTag>,
}

impl LineTags {
	/// Creates an empty mapping where every line is editable.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds tags from classifier rows.
	///
	/// If a row appears more than once, an immutable classification wins.
	pub fn from_decorations<'a>(rows: impl IntoIterator<Item = &'a DecorationRow>) -> Self {
		let mut tags = Self::new();
		for row in rows {
			let tag = row.tag();
			let slot = tags.tags.entry(row.line()).or_insert(tag);
			if tag == LineTag::Immutable {
				*slot = LineTag::Immutable;
			}
		}
		tags
	}

	/// Builds tags marking exactly `lines` as immutable.
	pub fn immutable_lines(lines: impl IntoIterator<Item = LineNr>) -> Self {
		lines.into_iter().map(|line| (line, LineTag::Immutable)).collect()
	}

	/// Sets the tag of a line.
	pub fn set(&mut self, line: LineNr, tag: LineTag) {
		self.tags.insert(line, tag);
	}

	/// Returns the tag of a line, editable if unknown.
	pub fn get(&self, line: LineNr) -> LineTag {
		self.tags.get(&line).copied().unwrap_or_default()
	}

	/// Returns true if `line` is tagged immutable.
	pub fn is_immutable(&self, line: LineNr) -> bool {
		self.get(line) == LineTag::Immutable
	}

	/// Iterates immutable lines in ascending order.
	pub fn immutable(&self) -> impl Iterator<Item = LineNr> + '_ {
		self.tags
			.iter()
			.filter(|(_, tag)| **tag == LineTag::Immutable)
			.map(|(line, _)| *line)
	}

	/// Returns true if no line is tagged at all.
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}
}

impl FromIterator<(LineNr, LineTag)> for LineTags {
	fn from_iter<I: IntoIterator<Item = (LineNr, LineTag)>>(iter: I) -> Self {
		Self {
			tags: iter.into_iter().collect(),
		}
	}
}

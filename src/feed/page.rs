//! Paginated table protocol: page requests and the page envelope.

use serde::{Deserialize, Serialize};

use crate::config::PAGE_LENGTHS;
use crate::domain::ArbitrageRoute;

/// Column the server orders rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderColumn {
    Diagram,
    Marginality,
}

impl OrderColumn {
    /// Column index in the table protocol.
    pub fn index(&self) -> u8 {
        match self {
            OrderColumn::Diagram => 0,
            OrderColumn::Marginality => 1,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Server-side ordering of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOrder {
    pub column: OrderColumn,
    #[serde(default)]
    pub dir: OrderDirection,
}

/// PageRequest selects one page of bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Request counter echoed back by the server.
    pub draw: u64,
    /// Offset of the first row.
    pub start: u32,
    /// Rows per page, always one of [`PAGE_LENGTHS`].
    pub length: u32,
    pub order: Option<PageOrder>,
}

impl PageRequest {
    /// Creates a request; an unsupported length falls back to 10 as the server does.
    pub fn new(draw: u64, start: u32, length: u32) -> Self {
        let length = if PAGE_LENGTHS.contains(&length) {
            length
        } else {
            PAGE_LENGTHS[0]
        };
        Self {
            draw,
            start,
            length,
            order: None,
        }
    }

    pub fn with_order(mut self, order: Option<PageOrder>) -> Self {
        self.order = order;
        self
    }

    /// Returns the query parameters for this request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("draw", self.draw.to_string()),
            ("start", self.start.to_string()),
            ("length", self.length.to_string()),
        ];
        if let Some(order) = self.order {
            pairs.push(("order[0][column]", order.column.index().to_string()));
            pairs.push(("order[0][dir]", order.dir.as_str().to_string()));
        }
        pairs
    }
}

/// BundlePage is one page as returned by the endpoint.
///
/// Rows are kept as raw JSON so one malformed row does not discard the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundlePage {
    #[serde(default)]
    pub draw: Option<String>,
    #[serde(rename = "recordsTotal", default)]
    pub records_total: u64,
    #[serde(rename = "recordsFiltered", default)]
    pub records_filtered: u64,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

impl BundlePage {
    /// Decodes each row, in page order.
    pub fn routes(&self) -> impl Iterator<Item = Result<ArbitrageRoute, serde_json::Error>> + '_ {
        self.data.iter().map(|row| ArbitrageRoute::deserialize(row))
    }

    /// Returns the rows selected by `request`, as the server would slice them.
    pub fn slice(mut self, request: &PageRequest) -> Self {
        let start = (request.start as usize).min(self.data.len());
        let end = (start + request.length as usize).min(self.data.len());
        self.data = self.data.drain(start..end).collect();
        self.draw = Some(request.draw.to_string());
        self
    }
}

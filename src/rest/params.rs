//! Query parameters for MoySklad requests.
//!
//! [`Params`] collects filter, sort, paging, expand and report directives and
//! renders them into a query in a fixed key order, so the same directives
//! always produce the same URL.
//!
//! # Example
//!
//! ```rust
//! use moysklad::rest::{Direction, Params};
//!
//! let params = Params::new()
//!     .filter_eq("name", "Milk")
//!     .filter_gt("updated", "2024-01-01 00:00:00")
//!     .order("code", Direction::Desc)
//!     .limit(50)
//!     .expand("agent");
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "filter=name%3DMilk%3Bupdated%3E2024-01-01%2000%3A00%3A00&order=code%2Cdesc&limit=50&expand=agent"
//! );
//! ```

use std::fmt;

use crate::rest::resources::common::Timestamp;

/// Largest page MoySklad returns.
pub const MAX_LIMIT: u32 = 1000;

/// Largest page MoySklad returns when `expand` is used.
pub const MAX_LIMIT_WITH_EXPAND: u32 = 100;

/// Comparison used in a `filter` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterOrEquals,
    /// `<=`
    LessOrEquals,
    /// `~`, substring match.
    Like,
    /// `~=`, prefix match.
    StartsWith,
    /// `=~`, suffix match.
    EndsWith,
}

impl FilterOperator {
    /// Returns the operator as written in the query.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterOrEquals => ">=",
            Self::LessOrEquals => "<=",
            Self::Like => "~",
            Self::StartsWith => "~=",
            Self::EndsWith => "=~",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending, the server default.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Direction {
    /// Returns the direction as written in `order`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Grouping step of plot series reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// One point per hour.
    Hour,
    /// One point per day.
    Day,
    /// One point per calendar month.
    Month,
}

impl Interval {
    /// Returns the value sent as `interval`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

/// Row grouping of stock reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    /// Products only; variants are folded into their product.
    Product,
    /// Products and variants.
    Variant,
    /// Products, variants and consignments.
    Consignment,
}

impl GroupBy {
    /// Returns the value sent as `groupBy`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Consignment => "consignment",
        }
    }
}

/// Which rows a stock report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockMode {
    /// Every row.
    All,
    /// Rows with positive stock.
    PositiveOnly,
    /// Rows with negative stock.
    NegativeOnly,
    /// Rows with zero stock.
    Empty,
    /// Rows with non-zero stock.
    NonEmpty,
    /// Rows below the minimum balance.
    UnderMinimum,
}

impl StockMode {
    /// Returns the value sent as `stockMode`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PositiveOnly => "positiveOnly",
            Self::NegativeOnly => "negativeOnly",
            Self::Empty => "empty",
            Self::NonEmpty => "nonEmpty",
            Self::UnderMinimum => "underMinimum",
        }
    }
}

/// Quantity reported by current stock reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockType {
    /// Physical stock.
    Stock,
    /// Stock minus reserve.
    FreeStock,
    /// Stock minus reserve plus in transit.
    Quantity,
    /// Reserved quantity.
    Reserve,
    /// Quantity in transit.
    InTransit,
}

impl StockType {
    /// Returns the value sent as `stockType`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::FreeStock => "freeStock",
            Self::Quantity => "quantity",
            Self::Reserve => "reserve",
            Self::InTransit => "inTransit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    key: String,
    operator: FilterOperator,
    value: String,
}

/// Query directives for a request.
///
/// Every method consumes and returns `self`. Filter values are sent as given;
/// an invalid filter is reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    filters: Vec<Filter>,
    order: Vec<(String, Direction)>,
    limit: Option<u32>,
    offset: Option<u32>,
    expand: Vec<String>,
    search: Option<String>,
    fields: Vec<String>,
    named_filter: Option<String>,
    moment_from: Option<Timestamp>,
    moment_to: Option<Timestamp>,
    interval: Option<Interval>,
    group_by: Option<GroupBy>,
    stock_mode: Option<StockMode>,
    stock_type: Option<StockType>,
    async_mode: bool,
}

impl Params {
    /// Creates empty params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `filter` condition.
    #[must_use]
    pub fn filter(
        mut self,
        key: impl Into<String>,
        operator: FilterOperator,
        value: impl fmt::Display,
    ) -> Self {
        self.filters.push(Filter {
            key: key.into(),
            operator,
            value: value.to_string(),
        });
        self
    }

    /// Adds a `key=value` filter.
    #[must_use]
    pub fn filter_eq(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::Equals, value)
    }

    /// Adds a `key!=value` filter.
    #[must_use]
    pub fn filter_ne(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::NotEquals, value)
    }

    /// Adds a `key>value` filter.
    #[must_use]
    pub fn filter_gt(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::Greater, value)
    }

    /// Adds a `key<value` filter.
    #[must_use]
    pub fn filter_lt(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::Less, value)
    }

    /// Adds a `key>=value` filter.
    #[must_use]
    pub fn filter_ge(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::GreaterOrEquals, value)
    }

    /// Adds a `key<=value` filter.
    #[must_use]
    pub fn filter_le(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::LessOrEquals, value)
    }

    /// Adds a `key~value` substring filter.
    #[must_use]
    pub fn filter_like(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filter(key, FilterOperator::Like, value)
    }

    /// Adds a sort key. Keys apply in the order they were added.
    #[must_use]
    pub fn order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order.push((field.into(), direction));
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Expands a reference field in the response. Nested fields use dots.
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Sets the full-text search string.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Requests an optional field, such as `stock` on positions.
    #[must_use]
    pub fn fields(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Applies a saved filter by its href.
    #[must_use]
    pub fn named_filter(mut self, href: impl Into<String>) -> Self {
        self.named_filter = Some(href.into());
        self
    }

    /// Sets the report period start (`momentFrom`).
    #[must_use]
    pub fn moment_from(mut self, moment: impl Into<Timestamp>) -> Self {
        self.moment_from = Some(moment.into());
        self
    }

    /// Sets the report period end (`momentTo`).
    #[must_use]
    pub fn moment_to(mut self, moment: impl Into<Timestamp>) -> Self {
        self.moment_to = Some(moment.into());
        self
    }

    /// Sets the plot series step.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets stock report row grouping.
    #[must_use]
    pub const fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Filters stock report rows by balance.
    #[must_use]
    pub const fn stock_mode(mut self, stock_mode: StockMode) -> Self {
        self.stock_mode = Some(stock_mode);
        self
    }

    /// Picks the quantity a current stock report returns.
    #[must_use]
    pub const fn stock_type(mut self, stock_type: StockType) -> Self {
        self.stock_type = Some(stock_type);
        self
    }

    /// Runs the request as an asynchronous job (`async=true`).
    #[must_use]
    pub const fn async_mode(mut self) -> Self {
        self.async_mode = true;
        self
    }

    /// Returns the page size, if set.
    #[must_use]
    pub const fn get_limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the page offset, if set.
    #[must_use]
    pub const fn get_offset(&self) -> Option<u32> {
        self.offset
    }

    /// Returns `true` if any field is expanded.
    #[must_use]
    pub fn has_expand(&self) -> bool {
        !self.expand.is_empty()
    }

    /// Returns `true` if async mode is requested.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        self.async_mode
    }

    /// Page size used when fetching every page: the caller's limit, or the
    /// server maximum for this request.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(if self.has_expand() {
            MAX_LIMIT_WITH_EXPAND
        } else {
            MAX_LIMIT
        })
    }

    /// Returns `true` if no directive is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }

    /// Renders the directives as key/value pairs in a fixed order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |key: &str, value: String| query.push((key.to_string(), value));

        if !self.filters.is_empty() {
            let filter = self
                .filters
                .iter()
                .map(|f| format!("{}{}{}", f.key, f.operator.as_str(), f.value))
                .collect::<Vec<_>>()
                .join(";");
            push("filter", filter);
        }
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(field, direction)| format!("{field},{}", direction.as_str()))
                .collect::<Vec<_>>()
                .join(";");
            push("order", order);
        }
        if let Some(limit) = self.limit {
            push("limit", limit.to_string());
        }
        if let Some(offset) = self.offset {
            push("offset", offset.to_string());
        }
        if !self.expand.is_empty() {
            push("expand", self.expand.join(","));
        }
        if let Some(search) = &self.search {
            push("search", search.clone());
        }
        if !self.fields.is_empty() {
            push("fields", self.fields.join(","));
        }
        if let Some(href) = &self.named_filter {
            push("namedfilter", href.clone());
        }
        if let Some(moment) = self.moment_from {
            push("momentFrom", moment.to_string());
        }
        if let Some(moment) = self.moment_to {
            push("momentTo", moment.to_string());
        }
        if let Some(interval) = self.interval {
            push("interval", interval.as_str().to_string());
        }
        if let Some(group_by) = self.group_by {
            push("groupBy", group_by.as_str().to_string());
        }
        if let Some(stock_mode) = self.stock_mode {
            push("stockMode", stock_mode.as_str().to_string());
        }
        if let Some(stock_type) = self.stock_type {
            push("stockType", stock_type.as_str().to_string());
        }
        if self.async_mode {
            push("async", "true".to_string());
        }

        query
    }

    /// Renders the directives as a percent-encoded query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_query()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &Params) -> Vec<String> {
        params.to_query().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_empty_params_render_nothing() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_key_order_is_fixed() {
        let params = Params::new()
            .async_mode()
            .expand("agent")
            .offset(10)
            .search("milk")
            .limit(5)
            .order("name", Direction::Asc)
            .filter_eq("archived", false);

        assert_eq!(
            keys(&params),
            vec!["filter", "order", "limit", "offset", "expand", "search", "async"]
        );
    }

    #[test]
    fn test_filters_join_in_insertion_order() {
        let params = Params::new()
            .filter_eq("a", 1)
            .filter_ne("b", 2)
            .filter("name", FilterOperator::StartsWith, "Mil")
            .filter("code", FilterOperator::EndsWith, "01");

        assert_eq!(params.to_query()[0].1, "a=1;b!=2;name~=Mil;code=~01");
    }

    #[test]
    fn test_order_and_expand_joining() {
        let params = Params::new()
            .order("name", Direction::Asc)
            .order("code", Direction::Desc)
            .expand("agent")
            .expand("positions.assortment");

        let query = params.to_query();
        assert_eq!(query[0], ("order".to_string(), "name,asc;code,desc".to_string()));
        assert_eq!(
            query[1],
            ("expand".to_string(), "agent,positions.assortment".to_string())
        );
    }

    #[test]
    fn test_report_directives() {
        let from: Timestamp = "2024-01-01 00:00:00".parse().unwrap();
        let params = Params::new()
            .stock_type(StockType::FreeStock)
            .stock_mode(StockMode::NonEmpty)
            .group_by(GroupBy::Variant)
            .interval(Interval::Day)
            .moment_from(from);

        assert_eq!(
            params.to_query(),
            vec![
                ("momentFrom".to_string(), "2024-01-01 00:00:00.000".to_string()),
                ("interval".to_string(), "day".to_string()),
                ("groupBy".to_string(), "variant".to_string()),
                ("stockMode".to_string(), "nonEmpty".to_string()),
                ("stockType".to_string(), "freeStock".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_size_defaults() {
        assert_eq!(Params::new().page_size(), 1000);
        assert_eq!(Params::new().expand("agent").page_size(), 100);
        assert_eq!(Params::new().expand("agent").limit(7).page_size(), 7);
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let params = Params::new().search("a b&c").named_filter("https://x/y?z=1");
        assert_eq!(
            params.to_query_string(),
            "search=a%20b%26c&namedfilter=https%3A%2F%2Fx%2Fy%3Fz%3D1"
        );
        assert_eq!(params.to_string(), params.to_query_string());
    }
}

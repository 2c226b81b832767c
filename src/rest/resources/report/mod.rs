//! Report endpoints (`report/...`).
//!
//! Reports are read-only. Most of them can also run as server-side jobs:
//! the `*_async` methods start the job and return an
//! [`AsyncTask`](crate::rest::AsyncTask) whose result decodes into the same
//! type as the synchronous call.
//!
//! | Service                  | Endpoint                            |
//! |--------------------------|-------------------------------------|
//! | [`DashboardService`]     | `report/dashboard/{day,week,month}` |
//! | [`StockService`]         | `report/stock/...`                  |
//! | [`PlotSeriesService`]    | `report/{sales,orders}/plotseries`  |
//! | [`ProfitService`]        | `report/profit/by...`               |

mod dashboard;
mod plot_series;
mod profit;
mod stock;

pub use dashboard::{Dashboard, DashboardMoney, DashboardSales, DashboardService};
pub use plot_series::{PlotSeries, PlotSeriesService, SeriesElement};
pub use profit::{
    ProfitByAssortment, ProfitByCounterparty, ProfitByEmployee, ProfitBySalesChannel,
    ProfitService, ProfitSummary, SalesChannelName,
};
pub use stock::{
    StockAll, StockByOperation, StockByStore, StockCurrent, StockPosition, StockService,
    StoreStock,
};

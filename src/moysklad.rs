//! Entry point bundling every service around one [`RestClient`].

use crate::clients::RestClient;
use crate::config::MoySkladConfig;
use crate::rest::resources::report::{
    DashboardService, PlotSeriesService, ProfitService, StockService,
};
use crate::rest::resources::{
    AccumulationDiscount, CashOut, Contract, Counterparty, CounterpartyAdjustment, CustomEntity,
    CustomerOrder, Discount, Enter, FactureOut, InternalOrder, InvoiceOut, PaymentOut,
    PersonalDiscount, Product, ProductionStageCompletion, Project, RetailSalesReturn,
    SpecialPriceDiscount, Task, Thing, Uom, Webhook,
};
use crate::rest::{AsyncService, Entity, EntityService};

/// MoySklad API client.
///
/// Services are created on demand and share the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad::{Credentials, MoySklad, MoySkladConfig};
/// use moysklad::rest::capabilities::GetList;
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::token("token")?)
///     .build()?;
/// let moysklad = MoySklad::new(&config);
///
/// let uoms = moysklad.uom().get_list(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MoySklad {
    client: RestClient,
}

impl MoySklad {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: &MoySkladConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    /// Wraps an existing REST client.
    #[must_use]
    pub const fn from_client(client: RestClient) -> Self {
        Self { client }
    }

    /// Returns the underlying REST client.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }

    /// Returns the service for any entity type.
    #[must_use]
    pub fn entity<E: Entity>(&self) -> EntityService<E> {
        EntityService::new(self.client.clone())
    }

    #[must_use]
    pub fn customer_order(&self) -> EntityService<CustomerOrder> {
        self.entity()
    }

    #[must_use]
    pub fn invoice_out(&self) -> EntityService<InvoiceOut> {
        self.entity()
    }

    #[must_use]
    pub fn payment_out(&self) -> EntityService<PaymentOut> {
        self.entity()
    }

    #[must_use]
    pub fn cash_out(&self) -> EntityService<CashOut> {
        self.entity()
    }

    #[must_use]
    pub fn facture_out(&self) -> EntityService<FactureOut> {
        self.entity()
    }

    #[must_use]
    pub fn internal_order(&self) -> EntityService<InternalOrder> {
        self.entity()
    }

    #[must_use]
    pub fn enter(&self) -> EntityService<Enter> {
        self.entity()
    }

    #[must_use]
    pub fn retail_sales_return(&self) -> EntityService<RetailSalesReturn> {
        self.entity()
    }

    #[must_use]
    pub fn counterparty_adjustment(&self) -> EntityService<CounterpartyAdjustment> {
        self.entity()
    }

    #[must_use]
    pub fn production_stage_completion(&self) -> EntityService<ProductionStageCompletion> {
        self.entity()
    }

    #[must_use]
    pub fn contract(&self) -> EntityService<Contract> {
        self.entity()
    }

    #[must_use]
    pub fn counterparty(&self) -> EntityService<Counterparty> {
        self.entity()
    }

    #[must_use]
    pub fn product(&self) -> EntityService<Product> {
        self.entity()
    }

    #[must_use]
    pub fn project(&self) -> EntityService<Project> {
        self.entity()
    }

    #[must_use]
    pub fn uom(&self) -> EntityService<Uom> {
        self.entity()
    }

    #[must_use]
    pub fn thing(&self) -> EntityService<Thing> {
        self.entity()
    }

    #[must_use]
    pub fn custom_entity(&self) -> EntityService<CustomEntity> {
        self.entity()
    }

    #[must_use]
    pub fn task(&self) -> EntityService<Task> {
        self.entity()
    }

    #[must_use]
    pub fn webhook(&self) -> EntityService<Webhook> {
        self.entity()
    }

    #[must_use]
    pub fn discount(&self) -> EntityService<Discount> {
        self.entity()
    }

    #[must_use]
    pub fn accumulation_discount(&self) -> EntityService<AccumulationDiscount> {
        self.entity()
    }

    #[must_use]
    pub fn personal_discount(&self) -> EntityService<PersonalDiscount> {
        self.entity()
    }

    #[must_use]
    pub fn special_price_discount(&self) -> EntityService<SpecialPriceDiscount> {
        self.entity()
    }

    /// Asynchronous job statuses.
    #[must_use]
    pub fn async_service(&self) -> AsyncService {
        AsyncService::new(self.client.clone())
    }

    #[must_use]
    pub fn report_dashboard(&self) -> DashboardService {
        DashboardService::new(self.client.clone())
    }

    #[must_use]
    pub fn report_stock(&self) -> StockService {
        StockService::new(self.client.clone())
    }

    #[must_use]
    pub fn report_sales(&self) -> PlotSeriesService {
        PlotSeriesService::sales(self.client.clone())
    }

    #[must_use]
    pub fn report_orders(&self) -> PlotSeriesService {
        PlotSeriesService::orders(self.client.clone())
    }

    #[must_use]
    pub fn report_profit(&self) -> ProfitService {
        ProfitService::new(self.client.clone())
    }
}

// Verify MoySklad is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySklad>();
};

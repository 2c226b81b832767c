//! MoySklad entities and reports.
//!
//! Each entity is a plain struct implementing [`Entity`](crate::rest::Entity).
//! Its operations live on [`EntityService<E>`](crate::rest::EntityService)
//! and come from the capability traits in [`crate::rest::capabilities`]
//! that the remote resource supports.
//!
//! # Documents
//!
//! [`CustomerOrder`], [`InvoiceOut`], [`PaymentOut`], [`CashOut`],
//! [`FactureOut`], [`InternalOrder`], [`Enter`], [`RetailSalesReturn`],
//! [`CounterpartyAdjustment`], [`ProductionStageCompletion`]
//!
//! # Dictionaries
//!
//! [`Contract`], [`Counterparty`], [`Product`], [`Project`], [`Uom`],
//! [`Thing`], [`CustomEntity`], [`Task`], [`Webhook`], and the discounts
//! ([`Discount`], [`AccumulationDiscount`], [`PersonalDiscount`],
//! [`SpecialPriceDiscount`])
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::capabilities::{Create, GetList};
//! use moysklad::rest::resources::{Counterparty, CustomerOrder};
//!
//! let agents = moysklad.counterparty().get_list(None).await?;
//!
//! let mut order = CustomerOrder::default();
//! order.set_agent(&agents.rows[0]);
//! let created = moysklad.customer_order().create(&order, None).await?;
//! ```

pub mod common;
pub mod report;

mod contract;
mod counterparty;
mod counterparty_adjustment;
mod custom_entity;
mod customer_order;
mod discount;
mod enter;
mod facture_out;
mod internal_order;
mod invoice_out;
mod payment_out;
mod position;
mod product;
mod production_stage_completion;
mod project;
mod retail_sales_return;
mod task;
mod thing;
mod uom;
mod webhook;

pub use contract::{Contract, ContractType, RewardType};
pub use counterparty::{CompanyType, Counterparty, CounterpartySettings, UniqueCodeRules};
pub use counterparty_adjustment::CounterpartyAdjustment;
pub use custom_entity::{CustomEntity, CustomEntityElement};
pub use customer_order::CustomerOrder;
pub use discount::{
    AccumulationDiscount, AccumulationLevel, Discount, PersonalDiscount, RoundOffDiscount,
    SpecialPriceDiscount,
};
pub use enter::{Enter, Overhead, OverheadDistribution};
pub use facture_out::FactureOut;
pub use internal_order::InternalOrder;
pub use invoice_out::InvoiceOut;
pub use payment_out::{CashOut, PaymentOut};
pub use position::{CustomerOrderPosition, Position};
pub use product::{Price, Product, SalePrice};
pub use production_stage_completion::{
    ProductionStageCompletion, ProductionStageCompletionMaterial, ProductionStageCompletionResult,
};
pub use project::Project;
pub use retail_sales_return::RetailSalesReturn;
pub use task::Task;
pub use thing::Thing;
pub use uom::Uom;
pub use webhook::{Webhook, WebhookAction, WebhookDiff, WebhookMethod};

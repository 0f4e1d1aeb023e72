//! Request and response bodies for the Rapyd REST endpoints.

mod address;
mod checkout;
mod customer;
mod data;
mod payment_method;
mod webhook;

pub use address::Address;
pub use checkout::{CheckoutResponse, CreateCheckout};
pub use customer::{
    Customer, CustomerPaymentMethod, CustomerPaymentMethodListResponse, CustomerResponse,
    RetrieveCustomer, RetrieveCustomerMethod, RetrieveCustomerMethods, RetrieveCustomerResponse,
};
pub use data::Data;
pub use payment_method::{
    CountryPaymentMethod, CountryPaymentMethodsResponse, Field, PaymentMethod,
    PaymentMethodRequiredFields, PaymentMethodRequiredFieldsResponse,
};
pub use webhook::{Webhook, WebhookType};

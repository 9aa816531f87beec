//! Customers and the payment methods saved against them.

use hyperswitch_api::{ApiClient, ApiError, AsyncTransport, BlockingApiClient, BlockingTransport};
use hyperswitch_api_macros::Operation;

use crate::models::{
    CustomerDefaultPaymentMethodResponse, CustomerDeleteResponse,
    CustomerPaymentMethodsListResponse, CustomerRequest, CustomerResponse, CustomerUpdateRequest,
    MandateResponse,
};

/// `POST /customers`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(method = Post, path = "/customers", output = CustomerResponse, typed(200), empty(400))]
pub struct CreateCustomer {
    #[operation(body)]
    pub body: CustomerRequest,
}

impl CreateCustomer {
    pub fn new(body: CustomerRequest) -> Self {
        Self { body }
    }
}

/// `GET /customers/{customer_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/customers/{customer_id}",
    output = CustomerResponse,
    typed(200),
    empty(404)
)]
pub struct RetrieveCustomer {
    #[operation(path)]
    pub customer_id: String,
}

impl RetrieveCustomer {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }
}

/// `POST /customers/{customer_id}`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/customers/{customer_id}",
    output = CustomerResponse,
    typed(200),
    empty(404)
)]
pub struct UpdateCustomer {
    #[operation(path)]
    pub customer_id: String,
    #[operation(body)]
    pub body: CustomerUpdateRequest,
}

impl UpdateCustomer {
    pub fn new(customer_id: impl Into<String>, body: CustomerUpdateRequest) -> Self {
        Self {
            customer_id: customer_id.into(),
            body,
        }
    }
}

/// `DELETE /customers/{customer_id}`
///
/// Redacts the customer along with its addresses and saved methods.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Delete,
    path = "/customers/{customer_id}",
    output = CustomerDeleteResponse,
    typed(200),
    empty(404)
)]
pub struct DeleteCustomer {
    #[operation(path)]
    pub customer_id: String,
}

impl DeleteCustomer {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }
}

/// `GET /customers/list`
#[derive(Debug, Clone, Default, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/customers/list",
    output = Vec<CustomerResponse>,
    typed(200),
    empty(400)
)]
pub struct ListCustomers {
    #[operation(query)]
    pub offset: Option<u32>,
    #[operation(query)]
    pub limit: Option<u16>,
}

/// `GET /customers/{customer_id}/mandates`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/customers/{customer_id}/mandates",
    output = Vec<MandateResponse>,
    typed(200),
    empty(400)
)]
pub struct ListCustomerMandates {
    #[operation(path)]
    pub customer_id: String,
}

impl ListCustomerMandates {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }
}

/// `GET /customers/{customer_id}/payment_methods`
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Get,
    path = "/customers/{customer_id}/payment_methods",
    output = CustomerPaymentMethodsListResponse,
    typed(200),
    empty(400, 404)
)]
pub struct ListCustomerPaymentMethods {
    #[operation(path)]
    pub customer_id: String,
}

impl ListCustomerPaymentMethods {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
        }
    }
}

/// `POST /{customer_id}/payment_methods/{payment_method_id}/default`
///
/// The path really has no `/customers` prefix.
#[derive(Debug, Clone, PartialEq, Operation)]
#[operation(
    method = Post,
    path = "/{customer_id}/payment_methods/{payment_method_id}/default",
    output = CustomerDefaultPaymentMethodResponse,
    typed(200),
    empty(400, 404)
)]
pub struct SetDefaultPaymentMethod {
    #[operation(path)]
    pub customer_id: String,
    #[operation(path)]
    pub payment_method_id: String,
}

impl SetDefaultPaymentMethod {
    pub fn new(customer_id: impl Into<String>, payment_method_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            payment_method_id: payment_method_id.into(),
        }
    }
}

/// Customer calls bound to a client; see [`Resources::customers`](crate::Resources::customers).
#[derive(Debug)]
pub struct Customers<'a, C> {
    pub(crate) client: &'a C,
}

impl<T: AsyncTransport> Customers<'_, ApiClient<T>> {
    pub async fn create(
        &self,
        body: CustomerRequest,
    ) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&CreateCustomer::new(body)).await
    }

    pub async fn retrieve(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&RetrieveCustomer::new(customer_id)).await
    }

    pub async fn update(
        &self,
        customer_id: impl Into<String>,
        body: CustomerUpdateRequest,
    ) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&UpdateCustomer::new(customer_id, body)).await
    }

    pub async fn delete(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerDeleteResponse>, ApiError> {
        self.client.execute(&DeleteCustomer::new(customer_id)).await
    }

    pub async fn list(
        &self,
        page: ListCustomers,
    ) -> Result<Option<Vec<CustomerResponse>>, ApiError> {
        self.client.execute(&page).await
    }

    pub async fn mandates(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<Vec<MandateResponse>>, ApiError> {
        self.client.execute(&ListCustomerMandates::new(customer_id)).await
    }

    pub async fn payment_methods(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerPaymentMethodsListResponse>, ApiError> {
        self.client
            .execute(&ListCustomerPaymentMethods::new(customer_id))
            .await
    }

    pub async fn set_default_payment_method(
        &self,
        customer_id: impl Into<String>,
        payment_method_id: impl Into<String>,
    ) -> Result<Option<CustomerDefaultPaymentMethodResponse>, ApiError> {
        self.client
            .execute(&SetDefaultPaymentMethod::new(customer_id, payment_method_id))
            .await
    }
}

impl<T: BlockingTransport> Customers<'_, BlockingApiClient<T>> {
    pub fn create(&self, body: CustomerRequest) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&CreateCustomer::new(body))
    }

    pub fn retrieve(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&RetrieveCustomer::new(customer_id))
    }

    pub fn update(
        &self,
        customer_id: impl Into<String>,
        body: CustomerUpdateRequest,
    ) -> Result<Option<CustomerResponse>, ApiError> {
        self.client.execute(&UpdateCustomer::new(customer_id, body))
    }

    pub fn delete(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerDeleteResponse>, ApiError> {
        self.client.execute(&DeleteCustomer::new(customer_id))
    }

    pub fn list(&self, page: ListCustomers) -> Result<Option<Vec<CustomerResponse>>, ApiError> {
        self.client.execute(&page)
    }

    pub fn mandates(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<Vec<MandateResponse>>, ApiError> {
        self.client.execute(&ListCustomerMandates::new(customer_id))
    }

    pub fn payment_methods(
        &self,
        customer_id: impl Into<String>,
    ) -> Result<Option<CustomerPaymentMethodsListResponse>, ApiError> {
        self.client.execute(&ListCustomerPaymentMethods::new(customer_id))
    }

    pub fn set_default_payment_method(
        &self,
        customer_id: impl Into<String>,
        payment_method_id: impl Into<String>,
    ) -> Result<Option<CustomerDefaultPaymentMethodResponse>, ApiError> {
        self.client
            .execute(&SetDefaultPaymentMethod::new(customer_id, payment_method_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperswitch_api::{Operation, Parsed, RestMethod};

    #[test]
    fn test_retrieve_customer_path() {
        let request = RetrieveCustomer::new("cus_y3oqhf46pyzuxjbcn2giaqnb44")
            .build_request()
            .unwrap();

        assert_eq!(request.method(), RestMethod::Get);
        assert_eq!(request.path(), "/customers/cus_y3oqhf46pyzuxjbcn2giaqnb44");
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_customer_id_cannot_leave_customers_path() {
        let request = RetrieveCustomer::new("../payments/pay_1?force_sync=true#")
            .build_request()
            .unwrap();
        let base = url::Url::parse("https://sandbox.hyperswitch.io").unwrap();
        let url = request.url(&base).unwrap();

        assert!(url.path().starts_with("/customers/"));
        assert_eq!(url.path_segments().unwrap().count(), 2);
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_delete_customer_method() {
        let request = DeleteCustomer::new("cus_1").build_request().unwrap();
        assert_eq!(request.method(), RestMethod::Delete);
        assert!(matches!(DeleteCustomer::parse_response(404, b""), Ok(Parsed::Empty)));
    }

    #[test]
    fn test_list_customers_paging() {
        let request = ListCustomers {
            offset: Some(20),
            limit: None,
        }
        .build_request()
        .unwrap();

        assert_eq!(request.query(), &[("offset".to_string(), "20".to_string())]);
    }

    #[test]
    fn test_set_default_payment_method_path() {
        let request = SetDefaultPaymentMethod::new("cus_1", "pm_2").build_request().unwrap();
        assert_eq!(request.path(), "/cus_1/payment_methods/pm_2/default");
        assert_eq!(SetDefaultPaymentMethod::STATUSES, &[200, 400, 404]);
    }
}

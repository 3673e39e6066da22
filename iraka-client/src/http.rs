//! HTTP client for the Iraka API

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{InitAdminResponse, LoginRequest, LoginResponse, SignupRequest};
use shared::models::{
    Activity, Customer, CustomerCreate, CustomerUpdate, DashboardStats, Inventory,
    InventoryCreate, InventoryUpdate, Invoice, InvoiceCreate, InvoiceUpdate, Movement,
    MovementRequest, Order, OrderCreate, OrderLine, OrderLineCreate, OrderLineUpdate, OrderUpdate,
    Product, ProductCreate, ProductUpdate, UserInfo, UserUpdate,
};
use shared::response::{
    AccountResponse, AccountsResponse, Ack, ActivitiesResponse, ClearResponse, CustomerResponse,
    CustomersResponse, DetailedHealthResponse, HealthResponse, InventoriesResponse,
    InventoryResponse, InvoiceResponse, InvoicesResponse, MovementResponse, MovementsResponse,
    OrderLineResponse, OrderLinesResponse, OrderResponse, OrdersResponse, ProductResponse,
    ProductsResponse, StatsResponse, StockSummaryResponse, UserResponse,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// Which credential a route expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Anonymous key
    Public,
    /// Session token from login
    Session,
}

/// HTTP client for the Iraka API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    anon_key: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url,
            anon_key: config.anon_key.clone(),
            token: config.token.clone(),
        })
    }

    /// Get the current session token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Full URL for an API route
    ///
    /// Each segment is percent-encoded on its own, so ids and emails may
    /// contain `/`, `#` or `?`.
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn bearer(&self, auth: Auth) -> ClientResult<&str> {
        match auth {
            Auth::Public => Ok(&self.anon_key),
            Auth::Session => self
                .token
                .as_deref()
                .ok_or_else(|| ClientError::Unauthorized("No hay sesión activa".to_string())),
        }
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
        auth: Auth,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .bearer_auth(self.bearer(auth)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Sending request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::from_status(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &[&str], auth: Auth) -> ClientResult<T> {
        self.send::<T, ()>(Method::GET, path, None, auth).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        auth: Auth,
    ) -> ClientResult<T> {
        self.send(Method::POST, path, Some(body), auth).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        auth: Auth,
    ) -> ClientResult<T> {
        self.send(Method::PUT, path, Some(body), auth).await
    }

    async fn delete(&self, path: &[&str], auth: Auth) -> ClientResult<()> {
        self.send::<Ack, ()>(Method::DELETE, path, None, auth)
            .await
            .map(|_| ())
    }

    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get(&["health"], Auth::Public).await
    }

    pub async fn health_detailed(&self) -> ClientResult<DetailedHealthResponse> {
        self.get(&["health", "detailed"], Auth::Public).await
    }

    // ========== Auth ==========

    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<UserInfo> {
        let resp: UserResponse = self.post(&["auth", "signup"], request, Auth::Public).await?;
        Ok(resp.data)
    }

    /// Log in and keep the returned token for protected calls
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.post(&["auth", "login"], &request, Auth::Public).await?;
        self.token = Some(resp.access_token.clone());
        Ok(resp)
    }

    /// Profile of the logged-in user
    pub async fn session(&self) -> ClientResult<UserInfo> {
        let resp: UserResponse = self.get(&["auth", "session"], Auth::Session).await?;
        Ok(resp.data)
    }

    /// Close the session on the server and forget the token
    pub async fn logout(&mut self) -> ClientResult<()> {
        let _: Ack = self
            .send::<Ack, ()>(Method::POST, &["auth", "logout"], None, Auth::Session)
            .await?;
        self.token = None;
        Ok(())
    }

    pub async fn init_admin(&self) -> ClientResult<InitAdminResponse> {
        self.send::<_, ()>(Method::POST, &["init", "admin"], None, Auth::Public)
            .await
    }

    // ========== Customers ==========

    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let resp: CustomersResponse = self.get(&["clientes"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn get_customer(&self, id: &str) -> ClientResult<Customer> {
        let resp: CustomerResponse = self.get(&["clientes", id], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn create_customer(&self, data: &CustomerCreate) -> ClientResult<Customer> {
        let resp: CustomerResponse = self.post(&["clientes"], data, Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn update_customer(&self, id: &str, data: &CustomerUpdate) -> ClientResult<Customer> {
        let resp: CustomerResponse = self
            .put(&["clientes", id], data, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_customer(&self, id: &str) -> ClientResult<()> {
        self.delete(&["clientes", id], Auth::Public).await
    }

    // ========== Products ==========

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let resp: ProductsResponse = self.get(&["productos"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        let resp: ProductResponse = self.get(&["productos", id], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn create_product(&self, data: &ProductCreate) -> ClientResult<Product> {
        let resp: ProductResponse = self.post(&["productos"], data, Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn update_product(&self, id: &str, data: &ProductUpdate) -> ClientResult<Product> {
        let resp: ProductResponse = self
            .put(&["productos", id], data, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.delete(&["productos", id], Auth::Public).await
    }

    /// Delete every product; returns how many were removed
    pub async fn clear_products(&self) -> ClientResult<usize> {
        let resp: ClearResponse = self
            .send::<_, ()>(Method::DELETE, &["productos", "limpiar-todo"], None, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    // ========== Inventory (session) ==========

    pub async fn list_inventory(&self) -> ClientResult<Vec<Inventory>> {
        let resp: InventoriesResponse = self.get(&["inventarios"], Auth::Session).await?;
        Ok(resp.data)
    }

    pub async fn get_inventory(&self, id: &str) -> ClientResult<Inventory> {
        let resp: InventoryResponse = self
            .get(&["inventarios", id], Auth::Session)
            .await?;
        Ok(resp.data)
    }

    pub async fn create_inventory(&self, data: &InventoryCreate) -> ClientResult<Inventory> {
        let resp: InventoryResponse = self.post(&["inventarios"], data, Auth::Session).await?;
        Ok(resp.data)
    }

    pub async fn update_inventory(
        &self,
        id: &str,
        data: &InventoryUpdate,
    ) -> ClientResult<Inventory> {
        let resp: InventoryResponse = self
            .put(&["inventarios", id], data, Auth::Session)
            .await?;
        Ok(resp.data)
    }

    // ========== Orders ==========

    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        let resp: OrdersResponse = self.get(&["pedidos"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        let resp: OrderResponse = self.get(&["pedidos", id], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn create_order(&self, data: &OrderCreate) -> ClientResult<Order> {
        let resp: OrderResponse = self.post(&["pedidos"], data, Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn update_order(&self, id: &str, data: &OrderUpdate) -> ClientResult<Order> {
        let resp: OrderResponse = self
            .put(&["pedidos", id], data, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&["pedidos", id], Auth::Public).await
    }

    // ========== Order lines ==========

    pub async fn list_order_lines(&self) -> ClientResult<Vec<OrderLine>> {
        let resp: OrderLinesResponse = self.get(&["lineas-pedido"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn order_lines_for(&self, order_id: &str) -> ClientResult<Vec<OrderLine>> {
        let resp: OrderLinesResponse = self
            .get(&["lineas-pedido", "pedido", order_id], Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn get_order_line(&self, id: &str) -> ClientResult<OrderLine> {
        let resp: OrderLineResponse = self
            .get(&["lineas-pedido", id], Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn create_order_line(&self, data: &OrderLineCreate) -> ClientResult<OrderLine> {
        let resp: OrderLineResponse = self.post(&["lineas-pedido"], data, Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn update_order_line(
        &self,
        id: &str,
        data: &OrderLineUpdate,
    ) -> ClientResult<OrderLine> {
        let resp: OrderLineResponse = self
            .put(&["lineas-pedido", id], data, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_order_line(&self, id: &str) -> ClientResult<()> {
        self.delete(&["lineas-pedido", id], Auth::Public)
            .await
    }

    // ========== Invoices ==========

    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        let resp: InvoicesResponse = self.get(&["facturas"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn get_invoice(&self, id: &str) -> ClientResult<Invoice> {
        let resp: InvoiceResponse = self.get(&["facturas", id], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn create_invoice(&self, data: &InvoiceCreate) -> ClientResult<Invoice> {
        let resp: InvoiceResponse = self.post(&["facturas"], data, Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn update_invoice(&self, id: &str, data: &InvoiceUpdate) -> ClientResult<Invoice> {
        let resp: InvoiceResponse = self
            .put(&["facturas", id], data, Auth::Public)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete_invoice(&self, id: &str) -> ClientResult<()> {
        self.delete(&["facturas", id], Auth::Public).await
    }

    // ========== Kardex ==========

    pub async fn list_movements(&self) -> ClientResult<Vec<Movement>> {
        let resp: MovementsResponse = self.get(&["kardex"], Auth::Public).await?;
        Ok(resp.data)
    }

    pub async fn movements_for_product(&self, product_id: &str) -> ClientResult<Vec<Movement>> {
        let resp: MovementsResponse = self
            .get(&["kardex", "producto", product_id], Auth::Public)
            .await?;
        Ok(resp.data)
    }

    /// Apply a stock movement
    ///
    /// Sent with the session token when logged in so the server records who
    /// made it.
    pub async fn apply_movement(&self, request: &MovementRequest) -> ClientResult<Movement> {
        let auth = if self.token.is_some() {
            Auth::Session
        } else {
            Auth::Public
        };
        let resp: MovementResponse = self.post(&["kardex"], request, auth).await?;
        Ok(resp.data)
    }

    pub async fn stock_summary(&self) -> ClientResult<StockSummaryResponse> {
        self.get(&["kardex", "existencias"], Auth::Public).await
    }

    // ========== Users, activity, dashboard (session) ==========

    pub async fn list_users(&self) -> ClientResult<Vec<UserInfo>> {
        let resp: AccountsResponse = self.get(&["usuarios"], Auth::Session).await?;
        Ok(resp.data)
    }

    pub async fn get_user(&self, email: &str) -> ClientResult<UserInfo> {
        let resp: AccountResponse = self
            .get(&["usuarios", email], Auth::Session)
            .await?;
        Ok(resp.data)
    }

    pub async fn update_user(&self, email: &str, data: &UserUpdate) -> ClientResult<UserInfo> {
        let resp: AccountResponse = self
            .put(&["usuarios", email], data, Auth::Session)
            .await?;
        Ok(resp.data)
    }

    pub async fn activity(&self) -> ClientResult<Vec<Activity>> {
        let resp: ActivitiesResponse = self.get(&["actividad"], Auth::Session).await?;
        Ok(resp.data)
    }

    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        let resp: StatsResponse = self.get(&["dashboard", "stats"], Auth::Session).await?;
        Ok(resp.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new(&ClientConfig::new("http://localhost:3000/make-server/", "anon")).unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = client();
        assert_eq!(
            client.url(&["clientes"]).as_str(),
            "http://localhost:3000/make-server/clientes"
        );
        assert_eq!(
            client.url(&["kardex", "existencias"]).as_str(),
            "http://localhost:3000/make-server/kardex/existencias"
        );

        let bare = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9", "anon")).unwrap();
        assert_eq!(bare.url(&["health"]).as_str(), "http://127.0.0.1:9/health");
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let client = client();
        assert_eq!(
            client.url(&["usuarios", "ana#1@iraka.com"]).as_str(),
            "http://localhost:3000/make-server/usuarios/ana%231@iraka.com"
        );
        assert_eq!(
            client.url(&["usuarios", "ana/1@iraka.com"]).as_str(),
            "http://localhost:3000/make-server/usuarios/ana%2F1@iraka.com"
        );
        assert_eq!(
            client.url(&["clientes", "a?b c"]).as_str(),
            "http://localhost:3000/make-server/clientes/a%3Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpClient::new(&ClientConfig::new("not a url", "anon")),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpClient::new(&ClientConfig::new("mailto:ana@iraka.com", "anon")),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_bearer_selection() {
        let mut client = client();
        assert_eq!(client.bearer(Auth::Public).unwrap(), "anon");
        assert!(matches!(
            client.bearer(Auth::Session),
            Err(ClientError::Unauthorized(_))
        ));

        client.set_token(Some("abc".to_string()));
        assert_eq!(client.bearer(Auth::Session).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_session_call_without_token_fails_fast() {
        // Nothing listens on this port; the call must fail before connecting
        let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9", "anon")).unwrap();
        assert!(matches!(
            client.list_users().await,
            Err(ClientError::Unauthorized(_))
        ));
    }
}

//! Servers for the three services.

use crate::clients::{MenuClient, UserClient};
use crate::menu_actor::MenuError;
use crate::order_service::OrderService;
use crate::rpc::{Request, Response, RpcService, Status};
use crate::user_actor::UserError;
use crate::validation::{CatalogValidation, UserValidation};
use actor_framework::ActorClient;
use async_trait::async_trait;

fn unimplemented(service: &str, request: &Request) -> Status {
    Status::unimplemented(format!("{service} does not implement {}", request.method()))
}

/// The user directory, backed by the user actor.
pub struct UserDirectoryService {
    name: String,
    users: UserClient,
}

impl UserDirectoryService {
    pub fn new(name: impl Into<String>, users: UserClient) -> Self {
        Self {
            name: name.into(),
            users,
        }
    }
}

#[async_trait]
impl RpcService for UserDirectoryService {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, request: Request) -> Result<Response, Status> {
        match request {
            Request::GetUser(id) => match self.users.get(id).await {
                Ok(Some(user)) => Ok(Response::User(user)),
                Ok(None) => Err(Status::not_found("user not found")),
                Err(e) => Err(Status::internal(format!("failed to fetch user: {e}"))),
            },
            Request::CreateUser(params) => match self.users.create_user(params).await {
                Ok(user) => Ok(Response::User(user)),
                Err(UserError::ValidationError(reason)) => Err(Status::invalid_argument(reason)),
                Err(e) => Err(Status::internal(format!("failed to create user: {e}"))),
            },
            Request::ListUsers => self
                .users
                .list()
                .await
                .map(|mut users| {
                    users.sort_by_key(|user| user.id.0);
                    Response::Users(users)
                })
                .map_err(|e| Status::internal(format!("failed to fetch users: {e}"))),
            other => Err(unimplemented(&self.name, &other)),
        }
    }
}

/// The menu catalog, backed by the menu actor.
pub struct CatalogService {
    name: String,
    menu: MenuClient,
}

impl CatalogService {
    pub fn new(name: impl Into<String>, menu: MenuClient) -> Self {
        Self {
            name: name.into(),
            menu,
        }
    }
}

fn menu_status(action: &str, e: MenuError) -> Status {
    match e {
        MenuError::NotFound(_) => Status::not_found("menu item not found"),
        MenuError::ValidationError(reason) => Status::invalid_argument(reason),
        other => Status::internal(format!("failed to {action}: {other}")),
    }
}

#[async_trait]
impl RpcService for CatalogService {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, request: Request) -> Result<Response, Status> {
        match request {
            Request::GetMenuItem(id) => match self.menu.get(id).await {
                Ok(Some(item)) => Ok(Response::MenuItem(item)),
                Ok(None) => Err(Status::not_found("menu item not found")),
                Err(e) => Err(menu_status("fetch menu item", e)),
            },
            Request::CreateMenuItem(params) => self
                .menu
                .create_menu_item(params)
                .await
                .map(Response::MenuItem)
                .map_err(|e| menu_status("create menu item", e)),
            Request::UpdateMenuItem(id, update) => self
                .menu
                .update_menu_item(id, update)
                .await
                .map(Response::MenuItem)
                .map_err(|e| menu_status("update menu item", e)),
            Request::ListMenuItems => self
                .menu
                .list()
                .await
                .map(|mut items| {
                    items.sort_by_key(|item| item.id.0);
                    Response::MenuItems(items)
                })
                .map_err(|e| menu_status("fetch menu items", e)),
            other => Err(unimplemented(&self.name, &other)),
        }
    }
}

/// The order service's RPC surface.
pub struct OrderRpcService<U, C> {
    name: String,
    orders: OrderService<U, C>,
}

impl<U, C> OrderRpcService<U, C> {
    pub fn new(name: impl Into<String>, orders: OrderService<U, C>) -> Self {
        Self {
            name: name.into(),
            orders,
        }
    }
}

#[async_trait]
impl<U, C> RpcService for OrderRpcService<U, C>
where
    U: UserValidation + 'static,
    C: CatalogValidation + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, request: Request) -> Result<Response, Status> {
        match request {
            Request::CreateOrder(request) => self
                .orders
                .create_order(request)
                .await
                .map(Response::Order)
                .map_err(Status::from),
            Request::GetOrder(id) => self
                .orders
                .get_order(id)
                .await
                .map(Response::Order)
                .map_err(Status::from),
            Request::ListOrders => self
                .orders
                .list_orders()
                .await
                .map(Response::Orders)
                .map_err(Status::from),
            other => Err(unimplemented(&self.name, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemCreate, MenuItemId, UserCreate, UserId};
    use crate::rpc::Code;

    #[tokio::test]
    async fn test_user_directory_answers_not_found() {
        let (actor, users) = crate::user_actor::new(8);
        tokio::spawn(actor.run());
        let service = UserDirectoryService::new("user-service", users);

        let status = service
            .handle(Request::GetUser(UserId(3)))
            .await
            .unwrap_err();
        assert_eq!(status, Status::not_found("user not found"));
    }

    #[tokio::test]
    async fn test_blank_user_name_is_invalid_argument() {
        let (actor, users) = crate::user_actor::new(8);
        tokio::spawn(actor.run());
        let service = UserDirectoryService::new("user-service", users);

        let status = service
            .handle(Request::CreateUser(UserCreate::new(" ", "x@example.com")))
            .await
            .unwrap_err();
        assert_eq!(status.code, Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_catalog_rejects_foreign_methods() {
        let (actor, menu) = crate::menu_actor::new(8);
        tokio::spawn(actor.run());
        let service = CatalogService::new("menu-service", menu);

        let created = service
            .handle(Request::CreateMenuItem(MenuItemCreate::new("Mocha", 4.0)))
            .await
            .unwrap();
        assert!(matches!(created, Response::MenuItem(item) if item.id == MenuItemId(1)));

        let status = service.handle(Request::ListUsers).await.unwrap_err();
        assert_eq!(status.code, Code::Unimplemented);
    }
}

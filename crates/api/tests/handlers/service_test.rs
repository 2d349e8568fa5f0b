use chrono::Utc;
use pretty_assertions::assert_eq;
use salonbook_core::errors::SalonError;
use salonbook_db::models::{DbCategory, DbService, DbServiceWithCategory};
use uuid::Uuid;

use crate::test_utils::TestContext;
use salonbook_api::middleware::error_handling::AppError;

// Create a wrapper that mirrors the service creation handler: a referenced
// category must exist before the row is inserted.
async fn test_create_service_wrapper(
    ctx: &mut TestContext,
    name: &'static str,
    duration_minutes: Option<i32>,
    category_id: Option<Uuid>,
) -> Result<DbService, AppError> {
    if let Some(category_id) = category_id {
        let category_exists = ctx
            .category_repo
            .get_category_by_id(category_id)
            .await?
            .is_some();

        if !category_exists {
            return Err(AppError(SalonError::NotFound(format!(
                "Category with ID {} not found",
                category_id
            ))));
        }
    }

    let service = ctx
        .service_repo
        .create_service(name, None, None, duration_minutes, category_id, true)
        .await?;

    Ok(service)
}

fn service_row(id: Uuid, name: &str, duration_minutes: Option<i32>) -> DbService {
    DbService {
        id,
        name: name.to_string(),
        description: None,
        price: None,
        duration_minutes,
        category_id: None,
        available: true,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_create_service_with_unknown_category() {
    let mut ctx = TestContext::new();
    let category_id = Uuid::new_v4();

    ctx.category_repo
        .expect_get_category_by_id()
        .returning(|_| Ok(None));

    let result =
        test_create_service_wrapper(&mut ctx, "Haircut", Some(45), Some(category_id)).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        SalonError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_service_success() {
    let mut ctx = TestContext::new();
    let category_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.category_repo
        .expect_get_category_by_id()
        .returning(move |id| {
            Ok(Some(DbCategory {
                id,
                name: "Hair".to_string(),
                description: None,
                created_at: now,
            }))
        });
    ctx.service_repo
        .expect_create_service()
        .returning(|name, _, _, duration_minutes, _, _| {
            Ok(service_row(Uuid::new_v4(), name, duration_minutes))
        });

    let service = test_create_service_wrapper(&mut ctx, "Haircut", Some(45), Some(category_id))
        .await
        .unwrap();

    assert_eq!(service.name, "Haircut");
    assert_eq!(service.duration_minutes, Some(45));
    assert!(service.available);
}

#[tokio::test]
async fn test_list_services_includes_category_names() {
    let mut ctx = TestContext::new();
    let now = Utc::now();

    ctx.service_repo.expect_list_services().returning(move || {
        Ok(vec![
            DbServiceWithCategory {
                id: Uuid::new_v4(),
                name: "Haircut".to_string(),
                description: None,
                price: Some(45000),
                duration_minutes: Some(45),
                category_id: Some(Uuid::new_v4()),
                category_name: Some("Hair".to_string()),
                available: true,
                created_at: now,
            },
            DbServiceWithCategory {
                id: Uuid::new_v4(),
                name: "Manicure".to_string(),
                description: None,
                price: Some(20000),
                duration_minutes: Some(30),
                category_id: None,
                category_name: None,
                available: true,
                created_at: now,
            },
        ])
    });

    let services = ctx.service_repo.list_services().await.unwrap();

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].category_name.as_deref(), Some("Hair"));
    assert_eq!(services[1].category_name, None);
}

#[tokio::test]
async fn test_update_service_not_found() {
    let mut ctx = TestContext::new();

    ctx.service_repo
        .expect_update_service()
        .returning(|_, _, _| Ok(None));

    let result = ctx
        .service_repo
        .update_service(Uuid::new_v4(), Some("Haircut"), None)
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_service_returns_deleted_row() {
    let mut ctx = TestContext::new();
    let service_id = Uuid::new_v4();

    ctx.service_repo
        .expect_delete_service()
        .returning(|id| Ok(Some(service_row(id, "Haircut", Some(45)))));

    let deleted = ctx
        .service_repo
        .delete_service(service_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(deleted.id, service_id);
}

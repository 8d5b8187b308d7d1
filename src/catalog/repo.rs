use sqlx::SqlitePool;

use super::repo_types::{NewService, Service};

/// All services, alphabetical by name.
pub async fn list_services(db: &SqlitePool) -> anyhow::Result<Vec<Service>> {
    let rows = sqlx::query_as::<_, Service>(
        r#"
        SELECT id, name, duration_minutes, price_gbp
        FROM services
        ORDER BY name ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_service(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Service>> {
    let row = sqlx::query_as::<_, Service>(
        r#"
        SELECT id, name, duration_minutes, price_gbp
        FROM services
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn create_service(db: &SqlitePool, new: &NewService) -> anyhow::Result<Service> {
    let row = sqlx::query_as::<_, Service>(
        r#"
        INSERT INTO services (name, duration_minutes, price_gbp)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, duration_minutes, price_gbp
        "#,
    )
    .bind(&new.name)
    .bind(new.duration_minutes)
    .bind(new.price_gbp)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Returns false when no service has this id.
pub async fn update_service(db: &SqlitePool, id: i64, new: &NewService) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        UPDATE services
        SET name = ?1, duration_minutes = ?2, price_gbp = ?3
        WHERE id = ?4
        "#,
    )
    .bind(&new.name)
    .bind(new.duration_minutes)
    .bind(new.price_gbp)
    .bind(id)
    .execute(db)
    .await?;
    Ok(res.rows_affected() > 0)
}

/// Deleting an unknown id is a no-op. Returns the number of rows removed.
pub async fn delete_service(db: &SqlitePool, id: i64) -> anyhow::Result<u64> {
    let res = sqlx::query("DELETE FROM services WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn svc(name: &str, minutes: i64, price: f64) -> NewService {
        NewService {
            name: name.into(),
            duration_minutes: minutes,
            price_gbp: price,
        }
    }

    #[tokio::test]
    async fn list_is_alphabetical() {
        let state = AppState::for_tests().await;
        for s in [svc("Massage", 60, 55.0), svc("Acupuncture", 45, 40.0), svc("Consultation", 15, 0.0)] {
            create_service(&state.db, &s).await.expect("create");
        }

        let names: Vec<String> = list_services(&state.db)
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Acupuncture", "Consultation", "Massage"]);
    }

    #[tokio::test]
    async fn update_and_get() {
        let state = AppState::for_tests().await;
        let created = create_service(&state.db, &svc("Physio", 30, 35.5)).await.expect("create");

        assert!(update_service(&state.db, created.id, &svc("Physio (long)", 60, 60.0))
            .await
            .expect("update"));
        let fetched = get_service(&state.db, created.id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(fetched.name, "Physio (long)");
        assert_eq!(fetched.duration_minutes, 60);

        assert!(!update_service(&state.db, 9999, &svc("x", 1, 1.0)).await.expect("update"));
        assert!(get_service(&state.db, 9999).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn delete_missing_id_leaves_table_unchanged() {
        let state = AppState::for_tests().await;
        create_service(&state.db, &svc("Physio", 30, 35.5)).await.expect("create");

        let removed = delete_service(&state.db, 424242).await.expect("delete is not an error");
        assert_eq!(removed, 0);
        assert_eq!(list_services(&state.db).await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn delete_existing_id() {
        let state = AppState::for_tests().await;
        let created = create_service(&state.db, &svc("Physio", 30, 35.5)).await.expect("create");
        assert_eq!(delete_service(&state.db, created.id).await.expect("delete"), 1);
        assert!(list_services(&state.db).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn store_rejects_invalid_rows() {
        let state = AppState::for_tests().await;
        assert!(create_service(&state.db, &svc("Zero", 0, 1.0)).await.is_err());
        assert!(create_service(&state.db, &svc("Negative", 10, -1.0)).await.is_err());
        assert!(list_services(&state.db).await.expect("list").is_empty());
    }
}

use sqlx::SqlitePool;

use super::repo_types::{Appointment, AppointmentListItem, NewAppointment};

const LIST_SELECT: &str = r#"
    SELECT a.id, a.patient_name, a.scheduled_at, s.name AS service_name,
           a.user_id, u.email AS booked_by
    FROM appointments a
    JOIN services s ON s.id = a.service_id
    JOIN users u ON u.id = a.user_id
"#;

/// Every appointment, soonest first. Admin view.
pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<AppointmentListItem>> {
    let sql = format!("{LIST_SELECT} ORDER BY a.scheduled_at ASC, a.id ASC");
    let rows = sqlx::query_as::<_, AppointmentListItem>(&sql)
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn list_for_user(
    db: &SqlitePool,
    user_id: i64,
) -> anyhow::Result<Vec<AppointmentListItem>> {
    let sql = format!("{LIST_SELECT} WHERE a.user_id = ?1 ORDER BY a.scheduled_at ASC, a.id ASC");
    let rows = sqlx::query_as::<_, AppointmentListItem>(&sql)
        .bind(user_id)
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn get_appointment(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Appointment>> {
    let row = sqlx::query_as::<_, Appointment>(
        r#"
        SELECT id, patient_name, scheduled_at, service_id, user_id
        FROM appointments
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// References are checked by the store's foreign keys only.
pub async fn create_appointment(
    db: &SqlitePool,
    new: &NewAppointment,
    user_id: i64,
) -> anyhow::Result<Appointment> {
    let row = sqlx::query_as::<_, Appointment>(
        r#"
        INSERT INTO appointments (patient_name, scheduled_at, service_id, user_id)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, patient_name, scheduled_at, service_id, user_id
        "#,
    )
    .bind(&new.patient_name)
    .bind(&new.scheduled_at)
    .bind(new.service_id)
    .bind(user_id)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete_appointment(db: &SqlitePool, id: i64) -> anyhow::Result<u64> {
    let res = sqlx::query("DELETE FROM appointments WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::{Role, User};
    use crate::catalog::{repo::create_service, repo_types::NewService};
    use crate::state::AppState;

    struct Fixture {
        state: AppState,
        alice: i64,
        bob: i64,
        service: i64,
    }

    async fn fixture() -> Fixture {
        let state = AppState::for_tests().await;
        let alice = User::create(&state.db, "alice@clinic.test", "h", Role::Staff)
            .await
            .expect("alice")
            .expect("new email")
            .id;
        let bob = User::create(&state.db, "bob@clinic.test", "h", Role::Staff)
            .await
            .expect("bob")
            .expect("new email")
            .id;
        let service = create_service(
            &state.db,
            &NewService {
                name: "Checkup".into(),
                duration_minutes: 30,
                price_gbp: 25.0,
            },
        )
        .await
        .expect("service")
        .id;
        Fixture {
            state,
            alice,
            bob,
            service,
        }
    }

    fn booking(patient: &str, at: &str, service_id: i64) -> NewAppointment {
        NewAppointment {
            patient_name: patient.into(),
            scheduled_at: at.into(),
            service_id,
        }
    }

    #[tokio::test]
    async fn listing_is_scoped_by_owner() {
        let f = fixture().await;
        create_appointment(&f.state.db, &booking("P1", "2026-11-02T10:00", f.service), f.alice)
            .await
            .expect("p1");
        create_appointment(&f.state.db, &booking("P2", "2026-11-01T09:00", f.service), f.bob)
            .await
            .expect("p2");
        create_appointment(&f.state.db, &booking("P3", "2026-11-01T08:00", f.service), f.alice)
            .await
            .expect("p3");

        let mine: Vec<String> = list_for_user(&f.state.db, f.alice)
            .await
            .expect("list")
            .into_iter()
            .map(|a| a.patient_name)
            .collect();
        assert_eq!(mine, vec!["P3", "P1"]);

        let all = list_all(&f.state.db).await.expect("list all");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].patient_name, "P3");
        assert_eq!(all[1].booked_by, "bob@clinic.test");
        assert_eq!(all[1].service_name, "Checkup");
    }

    #[tokio::test]
    async fn unknown_service_is_rejected_by_foreign_key() {
        let f = fixture().await;
        let res =
            create_appointment(&f.state.db, &booking("P", "2026-11-01T09:00", 9999), f.alice).await;
        assert!(res.is_err());
        assert!(list_all(&f.state.db).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn get_and_delete() {
        let f = fixture().await;
        let created =
            create_appointment(&f.state.db, &booking("P", "2026-11-01T09:00", f.service), f.bob)
                .await
                .expect("create");
        let fetched = get_appointment(&f.state.db, created.id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(fetched.user_id, f.bob);

        assert_eq!(delete_appointment(&f.state.db, created.id).await.expect("delete"), 1);
        assert_eq!(delete_appointment(&f.state.db, created.id).await.expect("delete"), 0);
        assert!(get_appointment(&f.state.db, created.id).await.expect("get").is_none());
    }
}

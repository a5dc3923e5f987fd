#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for user provisioning and profile management.

mod common;

use common::{fresh_module, seed_user};
use statuscraft::{NewUser, Role, Status, StatusCraftClientV1 as _, StatusCraftError, UserPatch};
use uuid::Uuid;

fn new_user(email: &str) -> NewUser {
    NewUser {
        id: None,
        first_name: "Margaret".to_owned(),
        last_name: "Hamilton".to_owned(),
        email: email.to_owned(),
        role: Role::Employee,
        position: "Engineer".to_owned(),
        avatar: String::new(),
        telegram: None,
        is_remote: true,
    }
}

#[tokio::test]
async fn admins_provision_users_with_clean_defaults() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;

    let created = client
        .create_user(admin.id, new_user("margaret@example.com"))
        .await
        .unwrap();
    assert_eq!(created.status, Status::Offline);
    assert_eq!(created.balance, 0);
    assert!(!created.disabled);
    assert!(created.status_comment.is_none());

    let listed = client.list_users().await.unwrap();
    assert!(listed.iter().any(|u| u.id == created.id));
}

#[tokio::test]
async fn provisioning_is_admin_only() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;

    let err = client
        .create_user(employee.id, new_user("someone@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StatusCraftError::PermissionDenied { actor } if actor == employee.id
    ));
}

#[tokio::test]
async fn invalid_emails_are_rejected() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;

    for email in ["", "   ", "not-an-email"] {
        let err = client
            .create_user(admin.id, new_user(email))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StatusCraftError::InvalidArgument { field, .. } if field == "email"
        ));
    }
}

#[tokio::test]
async fn users_edit_their_own_profile_but_not_others() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;
    let peer = seed_user(&module, Role::Employee, 0).await;

    let patch = UserPatch {
        position: Some("Senior Engineer".to_owned()),
        telegram: Some(Some("@margaret".to_owned())),
        ..UserPatch::default()
    };
    let updated = client
        .update_profile(employee.id, employee.id, patch.clone())
        .await
        .unwrap();
    assert_eq!(updated.position, "Senior Engineer");
    assert_eq!(updated.telegram.as_deref(), Some("@margaret"));

    let err = client
        .update_profile(employee.id, peer.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::PermissionDenied { .. }));
}

#[tokio::test]
async fn telegram_can_be_explicitly_cleared() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 0).await;

    client
        .update_profile(
            admin.id,
            employee.id,
            UserPatch {
                telegram: Some(Some("@handle".to_owned())),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();

    let cleared = client
        .update_profile(
            admin.id,
            employee.id,
            UserPatch {
                telegram: Some(None),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.telegram, None);
}

#[tokio::test]
async fn disabling_blocks_mutations_until_reenabled() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;
    let employee = seed_user(&module, Role::Employee, 0).await;

    let disabled = client
        .set_disabled(admin.id, employee.id, true)
        .await
        .unwrap();
    assert!(disabled.disabled);

    let err = client
        .set_own_status(employee.id, Status::Online, None)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::Disabled { .. }));

    let reenabled = client
        .set_disabled(admin.id, employee.id, false)
        .await
        .unwrap();
    assert!(!reenabled.disabled);

    client
        .set_own_status(employee.id, Status::Online, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn disable_toggle_is_admin_only() {
    let module = fresh_module().await;
    let client = module.client();
    let employee = seed_user(&module, Role::Employee, 0).await;
    let peer = seed_user(&module, Role::Employee, 0).await;

    let err = client
        .set_disabled(employee.id, peer.id, true)
        .await
        .unwrap_err();
    assert!(matches!(err, StatusCraftError::PermissionDenied { .. }));
}

#[tokio::test]
async fn unknown_users_surface_not_found() {
    let module = fresh_module().await;
    let client = module.client();

    let missing = Uuid::now_v7();
    let err = client.get_user(missing).await.unwrap_err();
    assert!(matches!(
        err,
        StatusCraftError::NotFound { entity, id } if entity == "User" && id == missing
    ));
}

#[tokio::test]
async fn pinned_ids_are_honored_on_provisioning() {
    let module = fresh_module().await;
    let client = module.client();
    let admin = seed_user(&module, Role::Admin, 0).await;

    let pinned = Uuid::now_v7();
    let mut request = new_user("pinned@example.com");
    request.id = Some(pinned);

    let created = client.create_user(admin.id, request).await.unwrap();
    assert_eq!(created.id, pinned);
}

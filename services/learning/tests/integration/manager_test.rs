use emmaus_domain::role::Role;
use emmaus_learning::domain::types::EntityKind;
use emmaus_learning::error::LearningServiceError;
use emmaus_learning::usecase::manager::{ReplaceManagersInput, ReplaceManagersUseCase};
use uuid::Uuid;

use crate::helpers::{InMemoryOrg, test_diocese, test_group, test_region, test_user};

fn usecase(org: &InMemoryOrg) -> ReplaceManagersUseCase<
    InMemoryOrg,
    InMemoryOrg,
    InMemoryOrg,
    InMemoryOrg,
    InMemoryOrg,
> {
    ReplaceManagersUseCase {
        managers: org.clone(),
        users: org.clone(),
        dioceses: org.clone(),
        regions: org.clone(),
        groups: org.clone(),
    }
}

#[tokio::test]
async fn replace_swaps_the_full_manager_set() {
    let org = InMemoryOrg::default();
    let diocese = test_diocese("Diocese of Smyrna");
    let old_manager = test_user(Role::SuperAdmin);
    let new_manager = test_user(Role::SuperAdmin);
    org.managers
        .lock()
        .unwrap()
        .push((EntityKind::Diocese, diocese.id, old_manager.id));
    org.users
        .lock()
        .unwrap()
        .extend([old_manager.clone(), new_manager.clone()]);
    org.dioceses.lock().unwrap().push(diocese.clone());

    let result = usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Diocese,
            entity_id: diocese.id,
            manager_ids: vec![new_manager.id],
        })
        .await
        .unwrap();

    assert_eq!(result, vec![new_manager.id]);
    assert_eq!(
        org.manager_ids(EntityKind::Diocese, diocese.id),
        vec![new_manager.id]
    );
}

#[tokio::test]
async fn empty_set_clears_all_managers() {
    let org = InMemoryOrg::default();
    let region = test_region("West", Uuid::now_v7());
    let manager = test_user(Role::RegionalAdmin);
    org.managers
        .lock()
        .unwrap()
        .push((EntityKind::Region, region.id, manager.id));
    org.users.lock().unwrap().push(manager);
    org.regions.lock().unwrap().push(region.clone());

    let result = usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Region,
            entity_id: region.id,
            manager_ids: vec![],
        })
        .await
        .unwrap();

    assert!(result.is_empty());
    assert!(org.manager_ids(EntityKind::Region, region.id).is_empty());
}

#[tokio::test]
async fn unknown_manager_id_rejects_and_leaves_set_unchanged() {
    let org = InMemoryOrg::default();
    let group = test_group("Delta", Uuid::now_v7());
    let existing = test_user(Role::LocalAdmin);
    org.managers
        .lock()
        .unwrap()
        .push((EntityKind::Group, group.id, existing.id));
    org.users.lock().unwrap().push(existing.clone());
    org.groups.lock().unwrap().push(group.clone());

    let result = usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Group,
            entity_id: group.id,
            manager_ids: vec![existing.id, Uuid::now_v7()],
        })
        .await;

    assert!(matches!(result, Err(LearningServiceError::UnknownManager)));
    assert_eq!(
        org.manager_ids(EntityKind::Group, group.id),
        vec![existing.id],
        "failed replace must not partially apply"
    );
}

#[tokio::test]
async fn unknown_target_entity_reports_kind_specific_not_found() {
    let org = InMemoryOrg::default();

    let result = usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Region,
            entity_id: Uuid::now_v7(),
            manager_ids: vec![],
        })
        .await;

    assert!(matches!(result, Err(LearningServiceError::RegionNotFound)));
}

#[tokio::test]
async fn same_user_may_manage_entities_at_different_levels() {
    let org = InMemoryOrg::default();
    let diocese = test_diocese("Diocese of Philadelphia");
    let region = test_region("East", diocese.id);
    let admin = test_user(Role::SuperAdmin);
    org.users.lock().unwrap().push(admin.clone());
    org.dioceses.lock().unwrap().push(diocese.clone());
    org.regions.lock().unwrap().push(region.clone());

    usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Diocese,
            entity_id: diocese.id,
            manager_ids: vec![admin.id],
        })
        .await
        .unwrap();
    usecase(&org)
        .execute(ReplaceManagersInput {
            kind: EntityKind::Region,
            entity_id: region.id,
            manager_ids: vec![admin.id],
        })
        .await
        .unwrap();

    assert_eq!(org.manager_ids(EntityKind::Diocese, diocese.id), vec![admin.id]);
    assert_eq!(org.manager_ids(EntityKind::Region, region.id), vec![admin.id]);
}

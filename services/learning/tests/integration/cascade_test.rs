use emmaus_domain::role::Role;
use emmaus_learning::domain::types::EntityKind;
use emmaus_learning::error::LearningServiceError;
use emmaus_learning::usecase::diocese::DeleteDioceseUseCase;
use emmaus_learning::usecase::group::DeleteGroupUseCase;
use emmaus_learning::usecase::region::DeleteRegionUseCase;
use uuid::Uuid;

use crate::helpers::{InMemoryOrg, test_diocese, test_group, test_region, test_user};

/// One diocese, two regions, three groups, a member in each group, and a
/// manager at every level.
fn seed_tree(org: &InMemoryOrg) -> (Uuid, Vec<Uuid>, Vec<Uuid>, Vec<Uuid>) {
    let diocese = test_diocese("Diocese of Ephesus");
    let region_a = test_region("North", diocese.id);
    let region_b = test_region("South", diocese.id);
    let group_1 = test_group("Alpha", region_a.id);
    let group_2 = test_group("Beta", region_a.id);
    let group_3 = test_group("Gamma", region_b.id);

    let mut members = vec![];
    for group in [&group_1, &group_2, &group_3] {
        let mut user = test_user(Role::User);
        user.group_id = Some(group.id);
        members.push(user.id);
        org.users.lock().unwrap().push(user);
    }

    let admin = test_user(Role::LocalAdmin);
    org.managers.lock().unwrap().extend([
        (EntityKind::Diocese, diocese.id, admin.id),
        (EntityKind::Region, region_a.id, admin.id),
        (EntityKind::Group, group_1.id, admin.id),
    ]);
    org.users.lock().unwrap().push(admin);

    let region_ids = vec![region_a.id, region_b.id];
    let group_ids = vec![group_1.id, group_2.id, group_3.id];
    org.dioceses.lock().unwrap().push(diocese.clone());
    org.regions.lock().unwrap().extend([region_a, region_b]);
    org.groups.lock().unwrap().extend([group_1, group_2, group_3]);

    (diocese.id, region_ids, group_ids, members)
}

#[tokio::test]
async fn diocese_delete_removes_whole_subtree() {
    let org = InMemoryOrg::default();
    let (diocese_id, _, _, _) = seed_tree(&org);

    let usecase = DeleteDioceseUseCase { repo: org.clone() };
    usecase.execute(diocese_id).await.unwrap();

    assert!(org.dioceses.lock().unwrap().is_empty());
    assert!(org.regions.lock().unwrap().is_empty());
    assert!(org.groups.lock().unwrap().is_empty());
}

#[tokio::test]
async fn diocese_delete_detaches_members_instead_of_deleting_them() {
    let org = InMemoryOrg::default();
    let (diocese_id, _, _, members) = seed_tree(&org);

    let usecase = DeleteDioceseUseCase { repo: org.clone() };
    usecase.execute(diocese_id).await.unwrap();

    let users = org.users.lock().unwrap();
    for member_id in members {
        let user = users.iter().find(|u| u.id == member_id).unwrap();
        assert!(user.group_id.is_none(), "member should survive, detached");
    }
}

#[tokio::test]
async fn diocese_delete_drops_manager_rows_at_every_level() {
    let org = InMemoryOrg::default();
    let (diocese_id, _, _, _) = seed_tree(&org);

    let usecase = DeleteDioceseUseCase { repo: org.clone() };
    usecase.execute(diocese_id).await.unwrap();

    assert!(org.managers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn region_delete_keeps_sibling_regions() {
    let org = InMemoryOrg::default();
    let (_, region_ids, group_ids, _) = seed_tree(&org);

    let usecase = DeleteRegionUseCase { repo: org.clone() };
    usecase.execute(region_ids[0]).await.unwrap();

    let regions = org.regions.lock().unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].id, region_ids[1]);

    // Groups under the deleted region are gone; the sibling's group stays.
    let groups = org.groups.lock().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, group_ids[2]);
}

#[tokio::test]
async fn group_delete_detaches_only_its_members() {
    let org = InMemoryOrg::default();
    let (_, _, group_ids, members) = seed_tree(&org);

    let usecase = DeleteGroupUseCase { repo: org.clone() };
    usecase.execute(group_ids[0]).await.unwrap();

    let users = org.users.lock().unwrap();
    let detached = users.iter().find(|u| u.id == members[0]).unwrap();
    let untouched = users.iter().find(|u| u.id == members[1]).unwrap();
    assert!(detached.group_id.is_none());
    assert_eq!(untouched.group_id, Some(group_ids[1]));
}

#[tokio::test]
async fn delete_unknown_region_returns_not_found() {
    let org = InMemoryOrg::default();
    seed_tree(&org);

    let usecase = DeleteRegionUseCase { repo: org.clone() };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(LearningServiceError::RegionNotFound)));
}

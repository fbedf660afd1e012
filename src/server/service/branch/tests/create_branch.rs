use super::*;

fn new_branch(ifsc: &str, bank_id: i64) -> NewBranch {
    NewBranch {
        ifsc: ifsc.to_string(),
        bank_id,
        name: "Main".to_string(),
        address: "1 Main Road".to_string(),
        city: "Mumbai".to_string(),
        district: None,
        state: "Maharashtra".to_string(),
    }
}

/// Expect the created branch to be retrievable by its IFSC
#[tokio::test]
async fn creates_branch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_bank(1)
        .build()
        .await?;

    let branch_service = BranchService::new(&test.db);
    branch_service
        .create_branch(new_branch("SBIN0000001", 1))
        .await?;
    let branch = branch_service.get_branch("SBIN0000001").await?;

    assert_eq!(branch.bank.id, 1);
    assert_eq!(branch.district, None);

    Ok(())
}

/// Expect ConstraintViolation for a duplicate IFSC
#[tokio::test]
async fn fails_for_duplicate_ifsc() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_branch("SBIN0000001", 1)
        .build()
        .await?;

    let branch_service = BranchService::new(&test.db);
    let result = branch_service
        .create_branch(new_branch("SBIN0000001", 1))
        .await;

    assert!(matches!(result, Err(Error::ConstraintViolation(_))));
    assert_eq!(test.directory().branch_count().await?, 1);

    Ok(())
}

/// Expect ConstraintViolation when the bank does not exist
#[tokio::test]
async fn fails_for_nonexistent_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;

    let branch_service = BranchService::new(&test.db);
    let result = branch_service
        .create_branch(new_branch("SBIN0000001", 7))
        .await;

    assert!(matches!(result, Err(Error::ConstraintViolation(_))));

    Ok(())
}

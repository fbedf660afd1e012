use super::*;

/// Expect the created bank to be retrievable by its assigned ID
#[tokio::test]
async fn creates_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;

    let bank_service = BankService::new(&test.db);
    let bank = bank_service
        .create_bank("State Bank of India", Some("SBI"))
        .await?;
    let fetched = bank_service.get_bank(bank.id).await?;

    assert_eq!(fetched.name, "State Bank of India");
    assert_eq!(fetched.code.as_deref(), Some("SBI"));

    Ok(())
}

/// Expect ConstraintViolation when the name is already taken
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;

    let bank_service = BankService::new(&test.db);
    bank_service.create_bank("HDFC Bank", Some("HDFC")).await?;
    let result = bank_service.create_bank("HDFC Bank", None).await;

    assert!(matches!(result, Err(Error::ConstraintViolation(_))));

    Ok(())
}

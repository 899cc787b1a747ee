//! Conversation-turn handler against the in-memory plan catalog.

use std::sync::Arc;

use coverage_context::adapters::InMemoryPlanCatalog;
use coverage_context::application::handlers::{
    ConversationTurnCommand, ConversationTurnHandler, TurnOutcome,
};
use coverage_context::config::EngineConfig;
use coverage_context::ports::PlanCandidate;
use coverage_context::{Category, ContextEngine, ConversationTurn, FieldKey, KnownFacts};

async fn catalog() -> InMemoryPlanCatalog {
    InMemoryPlanCatalog::with_plans([
        PlanCandidate::new("travel-world", "Mundo Total", Category::Travel),
        PlanCandidate::new("pet-dog", "Huellitas", Category::Pet).requiring("species", "dog"),
        PlanCandidate::new("pet-cat", "Michis", Category::Pet).requiring("species", "cat"),
        PlanCandidate::new("health-basic", "Salud Básica", Category::Health)
            .with_details(serde_json::json!({ "monthly_premium": 42 })),
    ])
    .await
}

fn handler(catalog: &InMemoryPlanCatalog) -> ConversationTurnHandler {
    ConversationTurnHandler::new(
        Arc::new(ContextEngine::default()),
        Arc::new(catalog.clone()),
    )
}

#[tokio::test]
async fn travel_conversation_reaches_plans_over_several_turns() {
    let catalog = catalog().await;
    let handler = handler(&catalog);
    let mut turns = vec![ConversationTurn::user("Hola, necesito un seguro de viaje")];

    let first = handler
        .handle(ConversationTurnCommand::new(turns.clone()))
        .await
        .unwrap();
    let TurnOutcome::AskQuestions(questions) = &first.outcome else {
        panic!("expected questions, got {:?}", first.outcome);
    };
    assert_eq!(questions.len(), 3);

    turns.push(ConversationTurn::assistant(&questions[0]));
    turns.push(ConversationTurn::user("Voy a Cancún"));
    let second = handler
        .handle(ConversationTurnCommand::new(turns.clone()))
        .await
        .unwrap();
    assert_eq!(
        second.analysis.missing_info(),
        &[FieldKey::Origin, FieldKey::Duration]
    );

    turns.push(ConversationTurn::user("Desde Bogotá, por 15 días"));
    let third = handler
        .handle(ConversationTurnCommand::new(turns))
        .await
        .unwrap();
    assert!(third.outcome.is_show_plans());
    assert_eq!(catalog.query_count(), 1);
}

#[tokio::test]
async fn pet_plans_filtered_by_extracted_species() {
    let catalog = catalog().await;
    let handler = handler(&catalog);

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Quiero asegurar a mi gato de 2 años",
    )]);
    let result = handler.handle(cmd).await.unwrap();

    match result.outcome {
        TurnOutcome::ShowPlans(plans) => {
            assert_eq!(plans.len(), 1);
            assert_eq!(plans[0].id, "pet-cat");
        }
        other => panic!("expected plans, got {other:?}"),
    }
}

#[tokio::test]
async fn vague_pet_age_keeps_asking() {
    let catalog = catalog().await;
    let handler = handler(&catalog);

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Mi perro es un cachorro",
    )]);
    let result = handler.handle(cmd).await.unwrap();

    assert!(matches!(result.outcome, TurnOutcome::AskQuestions(_)));
    assert_eq!(result.analysis.missing_info(), &[FieldKey::PetAge]);
    assert_eq!(catalog.query_count(), 0);
}

#[tokio::test]
async fn auto_without_plans_is_not_shown() {
    let catalog = catalog().await;
    let handler = handler(&catalog);

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Tengo un Nissan 2018 y vivo en Chile",
    )]);
    let result = handler.handle(cmd).await.unwrap();

    assert_eq!(result.category(), Category::Auto);
    assert_eq!(result.outcome, TurnOutcome::NoPlansAvailable);
}

#[tokio::test]
async fn stored_facts_complete_health_context() {
    let catalog = catalog().await;
    let handler = handler(&catalog);

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Busco un seguro de salud, tengo 45 años",
    )])
    .with_known_facts(
        KnownFacts::new()
            .with("gender", "male")
            .with("location", "Guadalajara"),
    );
    let result = handler.handle(cmd).await.unwrap();

    assert!(result.outcome.is_show_plans());
    assert_eq!(result.facts.get("location"), Some(&serde_json::json!("Guadalajara")));
    assert!(result.facts.has_value(FieldKey::Age));
}

#[tokio::test]
async fn strict_engine_asks_optional_travel_questions() {
    let catalog = catalog().await;
    let handler = ConversationTurnHandler::new(
        Arc::new(ContextEngine::new(&EngineConfig {
            ask_optional_fields: true,
            ..Default::default()
        })),
        Arc::new(catalog.clone()),
    );

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Seguro de viaje: salgo de Lima hacia Madrid por 10 días",
    )]);
    let result = handler.handle(cmd).await.unwrap();

    assert_eq!(
        result.analysis.missing_info(),
        &[FieldKey::Travelers, FieldKey::Purpose]
    );
    assert_eq!(catalog.query_count(), 0);
}

#[tokio::test]
async fn result_serializes_for_clients() {
    let catalog = catalog().await;
    let handler = handler(&catalog);

    let cmd = ConversationTurnCommand::new(vec![ConversationTurn::user(
        "Quiero un seguro de viaje",
    )]);
    let result = handler.handle(cmd).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["outcome"]["type"], "ask_questions");
    assert_eq!(json["analysis"]["category"], "travel");
}

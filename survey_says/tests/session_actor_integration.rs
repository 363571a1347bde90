/// Integration tests for the session actor
///
/// These tests talk to a spawned SessionActor only through its handle.
use std::sync::Arc;
use survey_says::{
    GameError, GameEvent, GamePhase, QuestionService, SessionActor, SessionHandle,
    entities::TeamId,
};

fn spawn_session() -> SessionHandle {
    let (actor, handle) = SessionActor::new(Arc::new(QuestionService::offline()));
    tokio::spawn(actor.run());
    handle
}

#[tokio::test]
async fn test_game_through_handle() {
    let handle = spawn_session();

    let state = handle
        .start_game(2, vec!["Alfa".to_string(), "Beta".to_string()])
        .await
        .unwrap();
    assert_eq!(state.phase(), GamePhase::FaceOff);

    for slot in 0..4 {
        handle.reveal_slot(slot).await.unwrap();
    }
    let state = handle.award_points(TeamId::new(0)).await.unwrap();
    assert_eq!(state.teams()[0].score(), 100);

    handle.end_game().await.unwrap();
    assert_eq!(handle.winner().await.unwrap().name, "Alfa");

    let events = handle.drain_events().await.unwrap();
    assert_eq!(events.len(), 8);
    assert!(matches!(events.last(), Some(GameEvent::GameEnded { .. })));

    handle.close().await;
}

#[tokio::test]
async fn test_reveal_by_id() {
    let handle = spawn_session();
    let state = handle.start_game(2, vec![]).await.unwrap();
    assert_eq!(state.teams()[0].name, "Team 1");

    let id = state.answer_id_at(3).unwrap().clone();
    let state = handle.reveal_answer(id.clone()).await.unwrap();
    assert_eq!(state.round_score(), 10);
    assert_eq!(
        handle.reveal_answer(id.clone()).await,
        Err(GameError::AnswerAlreadyRevealed(id))
    );
}

#[tokio::test]
async fn test_rejections_come_back_as_errors() {
    let handle = spawn_session();
    assert!(matches!(
        handle.advance_round().await,
        Err(GameError::InvalidOperationForPhase { .. })
    ));
    assert_eq!(handle.winner().await, Err(GameError::NoTeams));
    assert_eq!(handle.state().await.unwrap().phase(), GamePhase::Setup);
}

#[tokio::test]
async fn test_strike_acknowledge() {
    let handle = spawn_session();
    handle.start_game(2, vec![]).await.unwrap();

    let flash = handle.register_strike().await.unwrap();
    assert_eq!(handle.pending_strike().await.unwrap(), Some(flash));
    assert!(handle.acknowledge_strike(flash.generation).await.unwrap());
    assert!(!handle.acknowledge_strike(flash.generation).await.unwrap());
    assert_eq!(handle.pending_strike().await.unwrap(), None);
}

#[tokio::test]
async fn test_closed_session() {
    let (actor, handle) = SessionActor::new(Arc::new(QuestionService::offline()));
    let task = tokio::spawn(actor.run());
    handle.close().await;
    task.await.unwrap();

    assert_eq!(handle.state().await, Err(GameError::SessionClosed));
    assert_eq!(
        handle.start_game(2, vec![]).await,
        Err(GameError::SessionClosed)
    );
}

#[tokio::test]
async fn test_actor_stops_when_handles_drop() {
    let (actor, handle) = SessionActor::new(Arc::new(QuestionService::offline()));
    let task = tokio::spawn(actor.run());
    let clone = handle.clone();
    drop(handle);
    clone.state().await.unwrap();
    drop(clone);
    task.await.unwrap();
}

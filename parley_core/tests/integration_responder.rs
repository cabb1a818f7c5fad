//! End-to-end tests of the chat engine over the real pipeline.

use parley_core::rules::{RuleDef, RuleSet};
use parley_core::{ChatEngine, ChatSession, EntityLabel, TurnOutcome};
use parley_nlp::HeuristicPipeline;

fn engine() -> ChatEngine<HeuristicPipeline> {
    ChatEngine::with_builtin_rules(HeuristicPipeline::new()).unwrap()
}

#[test]
fn hi_draws_from_the_greeting_set() {
    let greetings = [
        "Hello! How can I assist you today?",
        "Hi there! What can I do for you?",
        "Greetings! How may I help you?",
    ];

    let mut engine = engine();
    for _ in 0..20 {
        let reply = engine.respond("Hi").unwrap();
        assert!(greetings.contains(&reply.as_str()), "unexpected: {reply}");
    }
}

#[test]
fn weather_question_gets_the_fixed_reply() {
    let mut engine = engine();
    let reply = engine.respond("What is the weather today").unwrap();
    assert_eq!(
        reply,
        "I'm sorry, I don't have real-time weather data. You might want to check a weather website or app."
    );
}

#[test]
fn gibberish_falls_through_to_the_catch_all() {
    let catch_all = [
        "I'm not sure I understand. Could you rephrase that?",
        "I'm still learning. Can you ask me something else?",
        "That's interesting. Tell me more.",
    ];

    let mut engine = engine();
    for _ in 0..20 {
        let reply = engine.respond("asdljasd").unwrap();
        assert!(catch_all.contains(&reply.as_str()), "unexpected: {reply}");
    }
}

#[test]
fn empty_input_still_gets_a_response() {
    let mut engine = engine();
    assert!(!engine.respond("").unwrap().is_empty());
}

#[test]
fn punctuation_and_case_do_not_break_matching() {
    let mut engine = engine();
    let reply = engine.respond("THANK YOU!!!").unwrap();
    let thanks = ["You're welcome!", "No problem! Happy to help.", "Anytime!"];
    assert!(thanks.contains(&reply.as_str()), "unexpected: {reply}");
}

#[test]
fn entities_are_remembered_across_turns() {
    let mut engine = engine();
    engine.respond("I want to visit Paris").unwrap();
    // A turn without entities leaves the slot untouched.
    engine.respond("hello").unwrap();

    let entities = engine.context().last_entities().unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "Paris");
    assert_eq!(entities[0].label, EntityLabel::Place);
}

#[test]
fn session_exposes_the_engine_context() {
    let mut session = ChatSession::new(engine());
    session.handle_line("I want to visit Paris");

    let entities = session.engine().context().last_entities().unwrap();
    assert_eq!(entities[0].text, "Paris");
}

#[test]
fn custom_rules_substitute_and_reflect_captures() {
    let rules = RuleSet::from_defs(&[RuleDef::new(
        "i need (.*)",
        &["Why do you need %1?"],
    )])
    .unwrap();
    let mut engine = ChatEngine::new(HeuristicPipeline::new(), rules);

    let reply = engine.respond("I need my coffee").unwrap();
    assert_eq!(reply, "Why do you need your coffee?");
}

#[test]
fn exit_word_ends_the_session_on_first_input() {
    let mut session = ChatSession::new(engine());
    let mut input = b"QUIT\nhello\n".as_slice();
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    // Only one prompt was issued; the second line was never read.
    assert_eq!(text.matches("You: ").count(), 1);
    assert!(text.contains("Goodbye! Have a great day!"));
    assert_eq!(session.turns(), 0);
}

#[test]
fn interactive_loop_prints_banner_prompt_and_reply() {
    let mut session = ChatSession::new(engine());
    let mut input = b"hello\nbye\n".as_slice();
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with(
        "NLP ChatBot: Hello! I'm a chatbot with some NLP capabilities. Type 'bye' to exit.\n"
    ));
    assert_eq!(text.matches("You: ").count(), 2);
    assert!(text.ends_with("NLP ChatBot: Goodbye! Have a great day!\n"));
}

#[test]
fn handle_line_classifies_outcomes() {
    let mut session = ChatSession::new(engine());
    match session.handle_line("hello") {
        TurnOutcome::Reply(reply) => assert!(!reply.is_empty()),
        other => panic!("expected a reply, got {other:?}"),
    }
    assert_eq!(session.handle_line("Bye"), TurnOutcome::Farewell);
}

use codesafe_login::activity::{ActivityLog, FixedClock};
use codesafe_login::auth::{CredentialStore, LogMode, LoginSystem};
use codesafe_login::session::{SessionOutcome, run_session};

type DemoSystem = LoginSystem<ActivityLog<FixedClock>>;

fn system(mode: LogMode) -> DemoSystem {
    let clock = FixedClock::at(10, 0, 0).unwrap();
    LoginSystem::with_mode(CredentialStore::seeded(), ActivityLog::with_clock(clock), mode)
}

// Helper to drive a session from scripted input and capture the transcript
async fn run(input: &str, system: &mut DemoSystem, max_attempts: u32) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let outcome = run_session(input.as_bytes(), &mut output, system, max_attempts)
        .await
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_first_attempt_success_transcript() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("alice\npassword123\n", &mut system, 3).await;

    assert_eq!(outcome, SessionOutcome::Authenticated("alice".into()));
    assert_eq!(
        transcript,
        "Welcome to the system demo.\n\
         You will have up to 3 attempts to log in.\n\
         \n\
         Attempt 1 of 3\n\
         Enter username: Enter password: [10:00:00] ATTEMPT user=alice\n\
         [10:00:00] RESULT: success\n\
         Login successful. Welcome, alice!\n\
         \n\
         Activity log:\n\
         \n\
         --- ACTIVITY LOG ---\n\
         [10:00:00] ATTEMPT user=alice\n\
         [10:00:00] RESULT: success\n\
         --- END OF LOG ---\n\
         \n"
    );
}

#[tokio::test]
async fn test_input_is_trimmed_before_authentication() {
    let mut system = system(LogMode::Secure);
    let (outcome, _) = run("  bob \r\n\tletmein  \r\n", &mut system, 3).await;

    assert_eq!(outcome, SessionOutcome::Authenticated("bob".into()));
    assert_eq!(system.sink().entries()[0].message, "ATTEMPT user=bob");
}

#[tokio::test]
async fn test_success_on_second_attempt_stops_loop() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("bob\nwrong\nbob\nletmein\nextra\nlines\n", &mut system, 3).await;

    assert!(outcome.is_authenticated());
    assert!(transcript.contains("Login failed. Try again."));
    assert!(transcript.contains("Attempt 2 of 3"));
    assert!(!transcript.contains("Attempt 3 of 3"));
    assert!(!transcript.contains("Too many failed attempts"));
    assert_eq!(system.sink().len(), 4);
    assert_eq!(system.sink().last().unwrap().message, "RESULT: success");
}

#[tokio::test]
async fn test_three_failures_exhaust_session() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("dave\nx\nalice\nbad\n\n\n", &mut system, 3).await;

    assert_eq!(outcome, SessionOutcome::Exhausted);
    assert_eq!(transcript.matches("Login failed. Try again.").count(), 3);
    assert!(transcript.contains("Too many failed attempts. Exiting...\n\nActivity log:\n"));

    let messages: Vec<&str> = system.sink().entries().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "ATTEMPT user=dave",
            "RESULT: failure (unknown user)",
            "ATTEMPT user=alice",
            "RESULT: failure (invalid password)",
            "ATTEMPT user=",
            "RESULT: failure (unknown user)",
        ]
    );
}

#[tokio::test]
async fn test_attempt_limit_is_configurable() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("eve\nnope\n", &mut system, 1).await;

    assert_eq!(outcome, SessionOutcome::Exhausted);
    assert!(transcript.contains("You will have up to 1 attempts to log in."));
    assert!(transcript.contains("Attempt 1 of 1\n"));
}

#[tokio::test]
async fn test_closed_input_still_dumps_log() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("", &mut system, 3).await;

    assert_eq!(outcome, SessionOutcome::InputClosed);
    assert!(system.sink().is_empty());
    assert!(transcript.contains("Input closed. Exiting..."));
    assert!(transcript.ends_with(
        "Activity log:\n\n--- ACTIVITY LOG ---\n(no activity recorded)\n--- END OF LOG ---\n\n"
    ));
}

#[tokio::test]
async fn test_input_closed_after_failed_attempt() {
    let mut system = system(LogMode::Secure);
    let (outcome, transcript) = run("bob\nwrong\ncharlie\n", &mut system, 3).await;

    assert_eq!(outcome, SessionOutcome::InputClosed);
    assert_eq!(system.sink().len(), 2);
    assert!(transcript.contains("[10:00:00] RESULT: failure (invalid password)"));
}

#[tokio::test]
async fn test_secure_session_never_prints_passwords() {
    let mut system = system(LogMode::Secure);
    let (_, transcript) = run("alice\nhunter2\nbob\nletmein\n", &mut system, 3).await;

    assert!(!transcript.contains("hunter2"));
    assert!(!transcript.contains("letmein"));
}

#[tokio::test]
async fn test_insecure_session_prints_passwords() {
    let mut system = system(LogMode::Insecure);
    let (_, transcript) = run("alice\nhunter2\nbob\nletmein\n", &mut system, 3).await;

    assert!(transcript.contains("[10:00:00] ATTEMPT user=alice password=hunter2"));
    assert!(transcript.contains("ATTEMPT user=bob password=letmein"));
}

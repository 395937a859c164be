//! Scripted transport for exercising the gateway without a git binary.
//!
//! Responses are matched by argument prefix, the most recently registered match
//! wins. Unmatched invocations succeed with empty output. Every invocation is
//! recorded so tests can assert which commands ran and in what order.

use super::{GitOutput, GitTransport};
use crate::core::error::{EasyCommitError, Result};
use std::cell::RefCell;
use std::io;

#[derive(Debug, Clone)]
enum Response {
    Output(GitOutput),
    Unavailable,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Vec<(Vec<String>, Response)>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A healthy repository on `branch` whose `status --porcelain -z` prints `porcelain`
    pub fn repository(branch: &str, porcelain: &str) -> Self {
        Self::new()
            .respond(&["rev-parse", "--is-inside-work-tree"], GitOutput::success("true\n"))
            .respond(&["symbolic-ref"], GitOutput::success(format!("{branch}\n")))
            .respond(&["status"], GitOutput::success(porcelain))
            .respond(
                &["remote", "get-url"],
                GitOutput::success("git@example.com:team/project.git\n"),
            )
    }

    pub fn respond(mut self, prefix: &[&str], output: GitOutput) -> Self {
        self.responses.push((owned(prefix), Response::Output(output)));
        self
    }

    /// Make matching invocations exit with `code` and `stderr`
    pub fn fail(self, prefix: &[&str], code: i32, stderr: &str) -> Self {
        self.respond(prefix, GitOutput::failure(code, stderr))
    }

    /// Make matching invocations behave as if git could not be started
    pub fn unavailable(mut self, prefix: &[&str]) -> Self {
        self.responses.push((owned(prefix), Response::Unavailable));
        self
    }

    /// Every recorded invocation, oldest first
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Number of recorded invocations starting with `prefix`
    pub fn count(&self, prefix: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| starts_with(call, prefix))
            .count()
    }

    pub fn invoked(&self, prefix: &[&str]) -> bool {
        self.count(prefix) > 0
    }
}

impl GitTransport for MockTransport {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let call = owned(args);
        let response = self
            .responses
            .iter()
            .rev()
            .find(|(prefix, _)| {
                let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
                starts_with(&call, &prefix)
            })
            .map(|(_, response)| response.clone());

        self.calls.borrow_mut().push(call);

        match response {
            Some(Response::Output(output)) => Ok(output),
            Some(Response::Unavailable) => Err(EasyCommitError::GitUnavailable {
                source: io::Error::new(io::ErrorKind::NotFound, "git not found"),
            }),
            None => Ok(GitOutput::success("")),
        }
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

fn starts_with(call: &[String], prefix: &[&str]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_matching_response_wins() {
        let transport = MockTransport::new()
            .respond(&["status"], GitOutput::success("first"))
            .respond(&["status"], GitOutput::success("second"));

        let output = transport.run(&["status", "--porcelain"]).unwrap();
        assert_eq!(output.stdout, "second");
    }

    #[test]
    fn test_unmatched_calls_succeed_and_are_recorded() {
        let transport = MockTransport::new();
        let output = transport.run(&["add", "--all"]).unwrap();

        assert!(output.is_success());
        assert!(transport.invoked(&["add"]));
        assert_eq!(transport.count(&["commit"]), 0);
    }

    #[test]
    fn test_prefix_longer_than_call_does_not_match() {
        let transport = MockTransport::new().fail(&["push", "origin", "main"], 1, "rejected");
        assert!(transport.run(&["push"]).unwrap().is_success());
    }
}

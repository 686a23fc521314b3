mod smoke_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Config, roster loading and the dashboard end to end
// - overlap_scenarios: Meeting slots and statuses with real timezone data
// - properties: Property-based tests for the minute arithmetic

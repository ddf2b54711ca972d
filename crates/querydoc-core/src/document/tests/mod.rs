mod argument_resolver_tests;

mod provided_type_tests;

mod struct_tests;
mod type_tests;

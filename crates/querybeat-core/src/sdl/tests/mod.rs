mod sdl_parser_tests;

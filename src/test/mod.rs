mod test_level_text;

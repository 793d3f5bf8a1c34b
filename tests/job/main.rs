mod payload;
